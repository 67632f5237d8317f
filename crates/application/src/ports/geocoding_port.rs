//! Geocoding port
//!
//! Defines the interface for resolving free-form location names.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-form location name to geographic coordinates
    async fn resolve(&self, location: &str) -> Result<GeoLocation, ApplicationError>;
}
