use crate::domain::Location;
use crate::tracker::TrackerError;

/// Receives pushes from a [`LocationTracker`](crate::tracker::LocationTracker).
///
/// Callbacks take `&self` because observers are shared as `Rc<dyn Observer>` between the caller and
/// the tracker. Implementations that keep state use interior mutability. A callback may subscribe
/// or dispose subscriptions on the tracker that is notifying it.
pub trait Observer {
    fn on_next(&self, location: Location);

    fn on_error(&self, error: &TrackerError);

    fn on_completed(&self);
}
