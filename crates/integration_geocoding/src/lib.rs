//! Geocoding integration for Skycast
//!
//! Converts free-form location names to geographic coordinates via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! The crate follows the client-trait pattern used by the other integration
//! crates: [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`].

mod client;

pub use client::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
