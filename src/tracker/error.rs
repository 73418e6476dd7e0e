use thiserror::Error;

/// Delivered to observers through [`Observer::on_error`](crate::tracker::Observer::on_error).
/// The tracker never returns it to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("the location cannot be determined")]
    LocationUnknown,
}
