//! Application configuration
//!
//! Split into focused sections by concern:
//! - `server`: HTTP server settings
//! - `geocoding`: Nominatim client settings
//! - `openmeteo`: Open-Meteo client settings
//! - `inference`: Ollama client settings
//! - `report`: persisted artifact location and default query

mod report;
mod server;

use ai_core::InferenceConfig;
use integration_geocoding::NominatimConfig;
use integration_openmeteo::OpenMeteoConfig;
use serde::{Deserialize, Serialize};

pub use report::ReportConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Open-Meteo configuration
    #[serde(default)]
    pub openmeteo: OpenMeteoConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Report artifact configuration
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment
    /// variables (e.g., `SKYCAST__SERVER__PORT`)
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or deserialization fails.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("SKYCAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_wires_all_sections() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.geocoding.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.openmeteo.weather_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.inference.base_url, "http://localhost:11434");
        assert_eq!(config.report.path.to_str(), Some("weather_forecast.json"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: AppConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.report.default_location, config.report.default_location);
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let json = r#"{"server": {"port": 8080}}"#;
        let config: AppConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.openmeteo.forecast_days, 3);
    }
}
