//! Infrastructure layer for Skycast
//!
//! Configuration loading, adapters implementing the application ports over
//! the integration crates, and report persistence.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{GeocodingAdapter, OllamaInferenceAdapter, OpenMeteoAdapter};
pub use config::{AppConfig, ReportConfig, ServerConfig};
pub use persistence::ReportFileStore;
