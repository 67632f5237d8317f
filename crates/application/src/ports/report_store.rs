//! Report store port
//!
//! The persisted JSON file is one possible transport for the assembled
//! report; this port is the actual boundary between the assembler and any
//! consumer of the document.

use async_trait::async_trait;
use domain::entities::ForecastReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting and retrieving the assembled report
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportStorePort: Send + Sync {
    /// Persist the report document, replacing any previous one
    async fn save(&self, report: &ForecastReport) -> Result<(), ApplicationError>;

    /// Load the most recently persisted report
    ///
    /// Returns `ApplicationError::NotFound` when no report has been
    /// persisted yet.
    async fn load(&self) -> Result<ForecastReport, ApplicationError>;
}
