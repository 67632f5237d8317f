//! File-backed report store
//!
//! Persists the assembled report as a pretty-printed JSON file with 4-space
//! indentation. The file is the hand-off point between the assembly pipeline
//! and the presentation layer.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ReportStorePort;
use async_trait::async_trait;
use domain::entities::ForecastReport;
use tracing::{debug, instrument};

/// Store writing the report document to a JSON file
#[derive(Debug, Clone)]
pub struct ReportFileStore {
    path: PathBuf,
}

impl ReportFileStore {
    /// Create a store for the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path the report is written to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportStorePort for ReportFileStore {
    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    async fn save(&self, report: &ForecastReport) -> Result<(), ApplicationError> {
        let json = report
            .to_json_pretty()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to write report to {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Report persisted");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<ForecastReport, ApplicationError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ApplicationError::NotFound(format!(
                    "Report file: {}",
                    self.path.display()
                )));
            },
            Err(e) => {
                return Err(ApplicationError::Internal(format!(
                    "Failed to read report from {}: {e}",
                    self.path.display()
                )));
            },
        };

        ForecastReport::from_json(&json).map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::entities::{DischargeOutlook, MetricMap, SnapshotGroup};
    use domain::value_objects::GeoLocation;

    fn sample_report() -> ForecastReport {
        let metrics: MetricMap = [
            ("rain".to_string(), 0.0),
            ("temperature".to_string(), 15.2),
        ]
        .into_iter()
        .collect();

        ForecastReport {
            location: GeoLocation::new_unchecked(48.85, 2.35),
            forecast: SnapshotGroup {
                current: Some(metrics.clone()),
                plus_1_hour: Some(metrics),
                plus_2_hour: None,
            },
            air_quality: SnapshotGroup::default(),
            river_discharge: DischargeOutlook {
                today: Some(12.3),
                tomorrow: None,
                day_after_tomorrow: None,
            },
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> ReportFileStore {
        ReportFileStore::new(dir.path().join("weather_forecast.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let report = sample_report();

        store.save(&report).await.expect("save");
        let loaded = store.load().await.expect("load");

        assert_eq!(loaded, report);
    }

    #[tokio::test]
    async fn file_uses_four_space_indentation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&sample_report()).await.expect("save");

        let contents = tokio::fs::read_to_string(store.path()).await.expect("read");
        assert!(contents.contains("\n    \"location\""));
        assert!(contents.contains("\"plus_2_hour\": null"));
    }

    #[tokio::test]
    async fn saving_twice_produces_identical_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let report = sample_report();

        store.save(&report).await.expect("first save");
        let first = tokio::fs::read(store.path()).await.expect("read");
        store.save(&report).await.expect("second save");
        let second = tokio::fs::read(store.path()).await.expect("read");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        let result = store.load().await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn corrupted_file_is_internal_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "{not json")
            .await
            .expect("write garbage");

        let result = store.load().await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
