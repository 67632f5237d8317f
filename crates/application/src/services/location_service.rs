//! Location resolution capability
//!
//! Thin wrapper over the geocoding port producing the pair-string form the
//! pipeline passes between its steps. Failures are folded into an
//! `"Error:"`-prefixed string so the calling step can surface them as
//! output instead of aborting.

use std::sync::Arc;

use domain::value_objects::GeoLocation;
use tracing::instrument;

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Service resolving free-form location names
pub struct LocationService {
    geocoding: Arc<dyn GeocodingPort>,
}

impl std::fmt::Debug for LocationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationService").finish_non_exhaustive()
    }
}

impl LocationService {
    /// Create a new location service
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve a location name to typed coordinates
    pub async fn resolve(&self, location: &str) -> Result<GeoLocation, ApplicationError> {
        self.geocoding.resolve(location).await
    }

    /// Resolve a location name to a `"latitude,longitude"` pair string,
    /// or an `"Error:"`-prefixed message on failure
    #[instrument(skip(self))]
    pub async fn coordinates_pair(&self, location: &str) -> String {
        match self.geocoding.resolve(location).await {
            Ok(coordinates) => coordinates.to_pair(),
            Err(e) => format!("Error: could not find coordinates for {location}: {e}"),
        }
    }
}
