//! A location tracker that pushes locations, unknown-location errors and completion to its
//! subscribed observers, synchronously and in subscription order.

pub mod app_config;
pub mod domain;
mod reading_deserializer;
pub mod replay;
pub mod reporter;
pub mod tracker;
