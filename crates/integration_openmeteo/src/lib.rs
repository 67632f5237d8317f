//! Open-Meteo integration
//!
//! Clients for the three Open-Meteo APIs (<https://open-meteo.com>): hourly
//! weather forecast, hourly air quality, and daily flood/river discharge.
//! None of them require an API key.

pub mod client;
mod models;

pub use client::{ForecastApi, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
pub use models::{
    AirQualityHourly, AirQualityResponse, FloodDaily, FloodResponse, WeatherHourly,
    WeatherResponse,
};
