//! Domain entities

mod forecast_report;
mod time_series;

pub use forecast_report::{DischargeOutlook, ForecastReport, SnapshotGroup};
pub use time_series::{DailySeries, HourlySeries, MetricMap, TimeSeriesPoint};
