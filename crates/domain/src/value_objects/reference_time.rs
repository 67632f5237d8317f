//! Report anchor instant
//!
//! All lookups within one report assembly derive from a single captured
//! instant, so the snapshots stay mutually consistent even if the assembly
//! spans several seconds.

use chrono::{DateTime, Days, DurationRound, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The anchor instant of a forecast report, normalized to the start of the
/// current hour (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferenceTime(DateTime<Utc>);

impl ReferenceTime {
    /// Capture the current wall-clock instant, truncated to the hour
    #[must_use]
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }

    /// Normalize an arbitrary instant to the start of its hour
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        // Truncation to one hour cannot fail for representable timestamps
        Self(instant.duration_trunc(TimeDelta::hours(1)).unwrap_or(instant))
    }

    /// The normalized anchor instant
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The three hourly query instants: reference, +1h, +2h
    #[must_use]
    pub fn hour_targets(&self) -> [DateTime<Utc>; 3] {
        [
            self.0,
            self.0 + TimeDelta::hours(1),
            self.0 + TimeDelta::hours(2),
        ]
    }

    /// The three daily query dates: today, tomorrow, day after tomorrow
    #[must_use]
    pub fn day_targets(&self) -> [NaiveDate; 3] {
        let today = self.0.date_naive();
        [today, today + Days::new(1), today + Days::new(2)]
    }
}

impl fmt::Display for ReferenceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
