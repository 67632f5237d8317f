//! Application state shared across handlers

use std::sync::Arc;

use application::ports::ReportStorePort;
use tera::Tera;

use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Store the persisted report is read from
    pub store: Arc<dyn ReportStorePort>,
    /// Template engine for page rendering
    pub templates: Arc<Tera>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state with the embedded templates
    pub fn new(store: Arc<dyn ReportStorePort>) -> Result<Self, ApiError> {
        let mut templates = Tera::default();
        templates
            .add_raw_template("report.html", include_str!("../templates/report.html"))
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(Self {
            store,
            templates: Arc::new(templates),
        })
    }
}
