//! Forecast data port
//!
//! Defines the interface over the three upstream time-series sources. Each
//! method returns the source's full window at its native interval; aligning
//! the series onto the report's target instants is the assembler's job, not
//! the source's.

use async_trait::async_trait;
use domain::entities::{DailySeries, HourlySeries};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the weather, air quality, and flood data sources
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastDataPort: Send + Sync {
    /// Hourly weather series (rain, temperature, humidity, wind speed)
    async fn hourly_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<HourlySeries, ApplicationError>;

    /// Hourly air quality series (pm10, pm2_5)
    async fn hourly_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<HourlySeries, ApplicationError>;

    /// Daily river discharge series
    async fn daily_river_discharge(
        &self,
        location: &GeoLocation,
    ) -> Result<DailySeries, ApplicationError>;

    /// Check if the forecast data source is available
    async fn is_available(&self) -> bool;
}
