//! Open-Meteo HTTP client
//!
//! One client covering the three Open-Meteo endpoints the report assembly
//! needs. Columnar payloads are normalized into domain series here; rows
//! with an unparseable timestamp fail the whole response, null metric cells
//! merely leave that metric out of the row.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use domain::entities::{DailySeries, HourlySeries, TimeSeriesPoint};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    AirQualityHourly, AirQualityResponse, FloodDaily, FloodResponse, WeatherHourly,
    WeatherResponse,
};

/// Open-Meteo client errors
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Open-Meteo service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Weather forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    /// Air quality API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,

    /// Flood API base URL (default: <https://flood-api.open-meteo.com/v1>)
    #[serde(default = "default_flood_base_url")]
    pub flood_base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days requested for the hourly series (1-16,
    /// default: 3, enough to bracket reference+2h and the three flood dates)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_air_quality_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

fn default_flood_base_url() -> String {
    "https://flood-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            air_quality_base_url: default_air_quality_base_url(),
            flood_base_url: default_flood_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Trait for the three forecast data sources
#[async_trait]
pub trait ForecastApi: Send + Sync {
    /// Hourly weather series (rain, temperature, humidity, wind speed)
    async fn hourly_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlySeries, OpenMeteoError>;

    /// Hourly air quality series (pm10, pm2_5)
    async fn hourly_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlySeries, OpenMeteoError>;

    /// Daily river discharge series
    async fn daily_river_discharge(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<DailySeries, OpenMeteoError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenMeteoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenMeteoError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenMeteoError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the weather forecast URL
    fn build_weather_url(&self, latitude: f64, longitude: f64) -> String {
        let days = self.config.forecast_days.clamp(1, 16);
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&timezone=UTC&forecast_days={}",
            self.config.weather_base_url,
            latitude,
            longitude,
            "rain,temperature_2m,relative_humidity_2m,wind_speed_10m",
            days
        )
    }

    /// Build the air quality URL
    fn build_air_quality_url(&self, latitude: f64, longitude: f64) -> String {
        let days = self.config.forecast_days.clamp(1, 16);
        format!(
            "{}/air-quality?latitude={}&longitude={}&hourly={}&timezone=UTC&forecast_days={}",
            self.config.air_quality_base_url, latitude, longitude, "pm10,pm2_5", days
        )
    }

    /// Build the flood URL
    ///
    /// The flood API's default window already spans months, so no
    /// `forecast_days` is passed.
    fn build_flood_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/flood?latitude={}&longitude={}&daily=river_discharge",
            self.config.flood_base_url, latitude, longitude
        )
    }

    /// Issue a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, OpenMeteoError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OpenMeteoError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenMeteoError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenMeteoError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OpenMeteoError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))
    }

    /// Parse datetime string to `DateTime<Utc>`
    fn parse_datetime(s: &str) -> Result<DateTime<Utc>, OpenMeteoError> {
        // Try ISO 8601 format first (2024-01-15T14:00)
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        // Try with seconds
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        // Try RFC 3339
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        Err(OpenMeteoError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }

    /// Parse calendar date string to `NaiveDate`
    fn parse_date(s: &str) -> Result<NaiveDate, OpenMeteoError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| OpenMeteoError::ParseError(format!("Invalid date '{s}': {e}")))
    }

    /// Turn parallel metric columns into an hourly series
    fn columns_to_series(
        time: &[String],
        columns: &[(&str, &[Option<f64>])],
    ) -> Result<HourlySeries, OpenMeteoError> {
        let mut points = Vec::with_capacity(time.len());

        for (i, stamp) in time.iter().enumerate() {
            let timestamp = Self::parse_datetime(stamp)?;
            let metrics = columns.iter().filter_map(|(name, values)| {
                values
                    .get(i)
                    .copied()
                    .flatten()
                    .map(|v| ((*name).to_string(), v))
            });
            points.push(TimeSeriesPoint::new(timestamp, metrics));
        }

        Ok(HourlySeries::new(points))
    }

    /// Convert the weather payload to a series with canonical metric names
    fn weather_series(hourly: &WeatherHourly) -> Result<HourlySeries, OpenMeteoError> {
        Self::columns_to_series(
            &hourly.time,
            &[
                ("rain", &hourly.rain),
                ("temperature", &hourly.temperature_2m),
                ("humidity", &hourly.relative_humidity_2m),
                ("wind_speed", &hourly.wind_speed_10m),
            ],
        )
    }

    /// Convert the air quality payload to a series
    fn air_quality_series(hourly: &AirQualityHourly) -> Result<HourlySeries, OpenMeteoError> {
        Self::columns_to_series(
            &hourly.time,
            &[("pm10", &hourly.pm10), ("pm2_5", &hourly.pm2_5)],
        )
    }

    /// Convert the flood payload to a daily series
    ///
    /// Dates with a null discharge value are left out of the series, which
    /// makes an exact-date lookup miss for them.
    fn discharge_series(daily: &FloodDaily) -> Result<DailySeries, OpenMeteoError> {
        let mut values = Vec::with_capacity(daily.time.len());

        for (i, stamp) in daily.time.iter().enumerate() {
            let date = Self::parse_date(stamp)?;
            if let Some(discharge) = daily.river_discharge.get(i).copied().flatten() {
                values.push((date, discharge));
            }
        }

        Ok(DailySeries::new(values))
    }
}

#[async_trait]
impl ForecastApi for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn hourly_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlySeries, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_weather_url(latitude, longitude);
        debug!(url = %url, "Fetching hourly weather");

        let response: WeatherResponse = self.get_json(&url).await?;
        let hourly = response.hourly.ok_or_else(|| {
            OpenMeteoError::ParseError("No hourly weather data in response".to_string())
        })?;

        Self::weather_series(&hourly)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn hourly_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlySeries, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_air_quality_url(latitude, longitude);
        debug!(url = %url, "Fetching hourly air quality");

        let response: AirQualityResponse = self.get_json(&url).await?;
        let hourly = response.hourly.ok_or_else(|| {
            OpenMeteoError::ParseError("No hourly air quality data in response".to_string())
        })?;

        Self::air_quality_series(&hourly)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn daily_river_discharge(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<DailySeries, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_flood_url(latitude, longitude);
        debug!(url = %url, "Fetching daily river discharge");

        let response: FloodResponse = self.get_json(&url).await?;
        let daily = response.daily.ok_or_else(|| {
            OpenMeteoError::ParseError("No daily flood data in response".to_string())
        })?;

        Self::discharge_series(&daily)
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check using Berlin coordinates
        self.hourly_weather(52.52, 13.41).await.is_ok()
    }
}
