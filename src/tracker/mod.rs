mod error;
mod location_tracker;
pub(crate) mod observer;
mod subscription;

pub use error::TrackerError;
pub use location_tracker::LocationTracker;
pub use observer::Observer;
pub use subscription::Subscription;
