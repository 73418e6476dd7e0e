mod location;
mod reading;

pub use location::Location;
pub use reading::Reading;
