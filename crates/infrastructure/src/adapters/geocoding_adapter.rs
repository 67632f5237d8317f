//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for location resolution using Nominatim
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(&NominatimConfig::default())
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e) | GeocodingError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            GeocodingError::Timeout => {
                ApplicationError::ExternalService("Geocoding request timed out".into())
            },
            GeocodingError::ParseError(e) => ApplicationError::Internal(e),
            GeocodingError::LocationNotFound(q) => {
                ApplicationError::NotFound(format!("Location: {q}"))
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, location: &str) -> Result<GeoLocation, ApplicationError> {
        let result = self.client.geocode(location).await.map_err(Self::map_error);

        match &result {
            Ok(coordinates) => {
                debug!(%coordinates, "Resolved location");
            },
            Err(e) => {
                debug!(error = %e, "Failed to resolve location");
            },
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        assert!(GeocodingAdapter::with_defaults().is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = GeocodingAdapter::with_defaults().unwrap();
        assert!(format!("{adapter:?}").contains("GeocodingAdapter"));
    }

    #[test]
    fn map_error_not_found() {
        let err = GeocodingError::LocationNotFound("Atlantis".into());
        let app_err = GeocodingAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::NotFound(_)));
        assert!(app_err.to_string().contains("Atlantis"));
    }

    #[test]
    fn map_error_connection_failed() {
        let err = GeocodingError::ConnectionFailed("refused".into());
        let app_err = GeocodingAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
        assert!(app_err.is_retryable());
    }

    #[test]
    fn map_error_timeout_is_retryable() {
        let app_err = GeocodingAdapter::map_error(GeocodingError::Timeout);
        assert!(app_err.is_retryable());
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeocodingAdapter>();
    }
}
