use crate::domain::CalendarUnit;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Los_Angeles;
pub const DEFAULT_BASE_PATH: &str = "/products/leaderboards";

/// The reference frame every period computation shares: which time zone
/// "today" is measured in and where leaderboard paths are rooted.
///
/// Validation, navigation and redirects all go through one value of this
/// type so they never disagree about what the current period is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCalendar {
    time_zone: Tz,
    base_path: String,
}

impl PeriodCalendar {
    pub fn new(time_zone: Tz, base_path: impl Into<String>) -> Self {
        Self {
            time_zone,
            base_path: base_path.into(),
        }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Calendar date of `now` in the reference time zone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.time_zone).date_naive()
    }

    /// Start of the period of `unit` that `now` falls in
    pub fn current_start(&self, unit: CalendarUnit, now: DateTime<Utc>) -> NaiveDate {
        unit.truncate(self.today(now))
    }
}

impl Default for PeriodCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_ZONE, DEFAULT_BASE_PATH)
    }
}
