//! Time-indexed metric series
//!
//! The three upstream sources deliver data at different native intervals:
//! weather and air quality hourly, river discharge daily. These types carry
//! the normalized series and the two lookup policies used during assembly:
//! nearest-row-at-or-after for hourly series, exact-date-or-missing for
//! daily series. The asymmetry is deliberate and must not be unified.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Ordered mapping from metric name to numeric value
pub type MetricMap = BTreeMap<String, f64>;

/// One row of an hourly series: a UTC timestamp plus its metric values
///
/// A metric that the source reported as null for this timestamp is simply
/// absent from the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Timestamp of the observation or forecast row (UTC)
    pub timestamp: DateTime<Utc>,
    /// Metric values for this row
    pub metrics: MetricMap,
}

impl TimeSeriesPoint {
    /// Create a point from a timestamp and metric pairs
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        metrics: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        Self {
            timestamp,
            metrics: metrics.into_iter().collect(),
        }
    }
}

/// An hourly series sorted by timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    points: Vec<TimeSeriesPoint>,
}

impl HourlySeries {
    /// Build a series from rows in any order
    #[must_use]
    pub fn new(mut points: Vec<TimeSeriesPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Nearest-row lookup: the row at exactly `target`, or the first row
    /// with a later timestamp
    ///
    /// Returns `None` when `target` lies beyond the end of the series;
    /// the caller records that slot as unavailable rather than failing.
    #[must_use]
    pub fn at_or_after(&self, target: DateTime<Utc>) -> Option<&TimeSeriesPoint> {
        let idx = self.points.partition_point(|p| p.timestamp < target);
        self.points.get(idx)
    }

    /// All rows in timestamp order
    #[must_use]
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A daily series keyed by calendar date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    values: BTreeMap<NaiveDate, f64>,
}

impl DailySeries {
    /// Build a series from date/value pairs
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = (NaiveDate, f64)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Exact-date lookup; a missing date yields `None`, never a neighbor
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> Option<f64> {
        self.values.get(&date).copied()
    }

    /// Number of dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no dates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
