//! The assembled forecast report
//!
//! Write-once artifact combining weather, air quality, and flood outlook for
//! one location at one reference hour. Every snapshot key is always present
//! in the serialized form; an unavailable slot is an explicit `null`, never
//! a missing key.

use serde::{Deserialize, Serialize};

use crate::entities::time_series::MetricMap;
use crate::value_objects::GeoLocation;

/// Three hourly snapshots of a metric group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotGroup {
    /// Metrics at the reference hour, or `None` if no row covered it
    pub current: Option<MetricMap>,
    /// Metrics one hour after the reference, or `None`
    pub plus_1_hour: Option<MetricMap>,
    /// Metrics two hours after the reference, or `None`
    pub plus_2_hour: Option<MetricMap>,
}

impl SnapshotGroup {
    /// Whether all three snapshots carry data
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current.is_some() && self.plus_1_hour.is_some() && self.plus_2_hour.is_some()
    }
}

/// River discharge values for the next three calendar days
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DischargeOutlook {
    /// Discharge for the reference date, or `None` if the source had no row
    pub today: Option<f64>,
    /// Discharge one day later, or `None`
    pub tomorrow: Option<f64>,
    /// Discharge two days later, or `None`
    pub day_after_tomorrow: Option<f64>,
}

/// The combined report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Location the report was assembled for
    pub location: GeoLocation,
    /// Weather snapshots (rain, temperature, humidity, wind speed)
    pub forecast: SnapshotGroup,
    /// Air quality snapshots (pm10, pm2_5)
    pub air_quality: SnapshotGroup,
    /// Flood risk outlook
    pub river_discharge: DischargeOutlook,
}

impl ForecastReport {
    /// Serialize with 4-space indentation
    ///
    /// This is the persisted wire format; metric maps are ordered, so the
    /// same report always serializes to the same bytes.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        use serde::ser::Error;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    /// Parse a report from its serialized form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
