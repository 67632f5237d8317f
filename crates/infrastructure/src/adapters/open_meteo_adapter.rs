//! Open-Meteo adapter - Implements ForecastDataPort using integration_openmeteo

use application::error::ApplicationError;
use application::ports::ForecastDataPort;
use async_trait::async_trait;
use domain::entities::{DailySeries, HourlySeries};
use domain::value_objects::{GeoLocation, InvalidCoordinates};
use integration_openmeteo::{ForecastApi, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
use tracing::{debug, instrument};

/// Adapter for the three forecast data sources using the Open-Meteo APIs
pub struct OpenMeteoAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for OpenMeteoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl OpenMeteoAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenMeteoConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: OpenMeteoError) -> ApplicationError {
        match err {
            OpenMeteoError::ConnectionFailed(e)
            | OpenMeteoError::RequestFailed(e)
            | OpenMeteoError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenMeteoError::ParseError(e) => ApplicationError::Internal(e),
            OpenMeteoError::InvalidCoordinates => ApplicationError::from(
                domain::DomainError::InvalidCoordinates(InvalidCoordinates),
            ),
            OpenMeteoError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl ForecastDataPort for OpenMeteoAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn hourly_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<HourlySeries, ApplicationError> {
        let result = self
            .client
            .hourly_weather(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(series) => {
                debug!(rows = series.len(), "Retrieved hourly weather");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get hourly weather");
            },
        }

        result
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn hourly_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<HourlySeries, ApplicationError> {
        let result = self
            .client
            .hourly_air_quality(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(series) => {
                debug!(rows = series.len(), "Retrieved hourly air quality");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get hourly air quality");
            },
        }

        result
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn daily_river_discharge(
        &self,
        location: &GeoLocation,
    ) -> Result<DailySeries, ApplicationError> {
        let result = self
            .client
            .daily_river_discharge(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(series) => {
                debug!(days = series.len(), "Retrieved daily river discharge");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get daily river discharge");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
