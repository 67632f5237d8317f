//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these
//! ports.

mod forecast_data_port;
mod geocoding_port;
mod inference_port;
mod report_store;

#[cfg(test)]
pub use forecast_data_port::MockForecastDataPort;
pub use forecast_data_port::ForecastDataPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use report_store::MockReportStorePort;
pub use report_store::ReportStorePort;
