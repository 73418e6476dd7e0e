use crate::domain::{Location, Reading};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Inner {
            latitude: Option<f64>,
            longitude: Option<f64>,
        }

        let inner = Inner::deserialize(deserializer)?;
        match (inner.latitude, inner.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Reading::known(Location::new(latitude, longitude))),
            (None, None) => Ok(Reading::unknown()),
            (Some(latitude), None) => Err(Error::custom(format!("reading with latitude {} is missing a longitude", latitude))),
            (None, Some(longitude)) => Err(Error::custom(format!("reading with longitude {} is missing a latitude", longitude))),
        }
    }
}
