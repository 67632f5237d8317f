//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod reference_time;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use reference_time::ReferenceTime;
