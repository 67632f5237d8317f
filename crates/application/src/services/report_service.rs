//! Forecast report assembly
//!
//! The assembler captures one reference hour, queries the three upstream
//! sources one after another, and aligns their series onto the report's
//! target instants. Hourly series use nearest-row-at-or-after lookups;
//! the daily flood series uses exact-date-or-missing lookups. A slot with
//! no covering row becomes a `null` marker; the document's shape is always
//! complete even when its data is not.

use std::sync::Arc;

use domain::entities::{DailySeries, DischargeOutlook, ForecastReport, HourlySeries, SnapshotGroup};
use domain::value_objects::{GeoLocation, ReferenceTime};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::ForecastDataPort;

/// Service assembling the combined forecast report
pub struct ReportService {
    data: Arc<dyn ForecastDataPort>,
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService").finish_non_exhaustive()
    }
}

impl ReportService {
    /// Create a new report service
    #[must_use]
    pub fn new(data: Arc<dyn ForecastDataPort>) -> Self {
        Self { data }
    }

    /// Assemble a report for the current hour
    ///
    /// The reference instant is captured once, so all derived lookups stay
    /// mutually consistent even if the three queries span several seconds.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn assemble(
        &self,
        location: GeoLocation,
    ) -> Result<ForecastReport, ApplicationError> {
        self.assemble_at(location, ReferenceTime::now()).await
    }

    /// Assemble a report from a `"latitude,longitude"` pair string
    ///
    /// A malformed pair fails here, before any source is queried.
    pub async fn assemble_from_pair(
        &self,
        pair: &str,
    ) -> Result<ForecastReport, ApplicationError> {
        let location = GeoLocation::parse_pair(pair)?;
        self.assemble(location).await
    }

    /// Assemble a report anchored at an explicit reference time
    pub async fn assemble_at(
        &self,
        location: GeoLocation,
        reference: ReferenceTime,
    ) -> Result<ForecastReport, ApplicationError> {
        let weather = self.data.hourly_weather(&location).await?;
        let air_quality = self.data.hourly_air_quality(&location).await?;
        let discharge = self.data.daily_river_discharge(&location).await?;

        debug!(
            %reference,
            weather_rows = weather.len(),
            air_quality_rows = air_quality.len(),
            discharge_days = discharge.len(),
            "Assembling forecast report"
        );

        Ok(ForecastReport {
            location,
            forecast: Self::snapshot_group(&weather, reference),
            air_quality: Self::snapshot_group(&air_quality, reference),
            river_discharge: Self::discharge_outlook(&discharge, reference),
        })
    }

    /// Align an hourly series onto the reference, +1h, +2h instants
    fn snapshot_group(series: &HourlySeries, reference: ReferenceTime) -> SnapshotGroup {
        let [current, plus_1_hour, plus_2_hour] = reference
            .hour_targets()
            .map(|target| series.at_or_after(target).map(|point| point.metrics.clone()));

        SnapshotGroup {
            current,
            plus_1_hour,
            plus_2_hour,
        }
    }

    /// Pick the three outlook dates out of the daily series
    fn discharge_outlook(series: &DailySeries, reference: ReferenceTime) -> DischargeOutlook {
        let [today, tomorrow, day_after_tomorrow] =
            reference.day_targets().map(|date| series.on(date));

        DischargeOutlook {
            today,
            tomorrow,
            day_after_tomorrow,
        }
    }
}
