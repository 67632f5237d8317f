//! Open-Meteo response models
//!
//! Raw columnar payloads as the three APIs return them. Each hourly payload
//! carries parallel arrays indexed by the `time` array; cells can be null
//! when the model has no value for a slot.

use serde::Deserialize;

/// Raw response from the weather forecast API
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Option<WeatherHourly>,
}

/// Hourly weather columns
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherHourly {
    pub time: Vec<String>,
    #[serde(default)]
    pub rain: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
}

/// Raw response from the air quality API
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Option<AirQualityHourly>,
}

/// Hourly air quality columns
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityHourly {
    pub time: Vec<String>,
    #[serde(default)]
    pub pm10: Vec<Option<f64>>,
    #[serde(default)]
    pub pm2_5: Vec<Option<f64>>,
}

/// Raw response from the flood API
#[derive(Debug, Clone, Deserialize)]
pub struct FloodResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub daily: Option<FloodDaily>,
}

/// Daily river discharge columns
#[derive(Debug, Clone, Deserialize)]
pub struct FloodDaily {
    pub time: Vec<String>,
    #[serde(default)]
    pub river_discharge: Vec<Option<f64>>,
}
