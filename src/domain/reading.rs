use crate::domain::Location;

/// One configured input for the tracker: a known location or an unknown one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading(Option<Location>);

impl Reading {
    pub fn known(location: Location) -> Self {
        Reading(Some(location))
    }

    pub fn unknown() -> Self {
        Reading(None)
    }

    pub fn location(&self) -> Option<Location> {
        self.0
    }
}
