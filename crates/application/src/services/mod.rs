//! Application services - Use case implementations

mod advisor_service;
mod location_service;
mod report_service;

pub use advisor_service::{Advisory, AdvisorService};
pub use location_service::LocationService;
pub use report_service::ReportService;
