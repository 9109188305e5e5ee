use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a leaderboard period.
///
/// Everything that differs between the daily, weekly, monthly and yearly
/// boards lives in this table: required path fields, truncation, stepping
/// and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    pub const ALL: [CalendarUnit; 4] = [
        CalendarUnit::Day,
        CalendarUnit::Week,
        CalendarUnit::Month,
        CalendarUnit::Year,
    ];

    /// Map a coarse period name (`daily`, `weekly`, ...) to its unit
    pub fn from_period_name(name: &str) -> Option<Self> {
        match name {
            "daily" => Some(Self::Day),
            "weekly" => Some(Self::Week),
            "monthly" => Some(Self::Month),
            "yearly" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn period_name(self) -> &'static str {
        match self {
            Self::Day => "daily",
            Self::Week => "weekly",
            Self::Month => "monthly",
            Self::Year => "yearly",
        }
    }

    /// Path components a period of this unit is addressed by, in URL order
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Day => &["year", "month", "day"],
            Self::Week => &["year", "week"],
            Self::Month => &["year", "month"],
            Self::Year => &["year"],
        }
    }

    /// Start of the period containing `date`. Weeks start on Monday (ISO 8601).
    pub fn truncate(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => date - Duration::days(date.weekday().num_days_from_monday() as i64),
            Self::Month => date - Duration::days(date.day0() as i64),
            Self::Year => date - Duration::days(date.ordinal0() as i64),
        }
    }

    /// Shift a period start by `delta` whole units.
    ///
    /// Month and year steps clamp to the last valid day of the target month
    /// rather than overflowing into the next one.
    pub fn step(self, start: NaiveDate, delta: i32) -> Option<NaiveDate> {
        match self {
            Self::Day => start.checked_add_signed(Duration::days(delta as i64)),
            Self::Week => start.checked_add_signed(Duration::weeks(delta as i64)),
            Self::Month => shift_months(start, delta),
            Self::Year => shift_months(start, delta.checked_mul(12)?),
        }
    }

    /// Last day of the period beginning at `start`
    pub fn end(self, start: NaiveDate) -> Option<NaiveDate> {
        self.step(start, 1)?.pred_opt()
    }

    /// Long human-readable label used in page titles
    pub fn label(self, start: NaiveDate) -> String {
        match self {
            Self::Day => start.format("%b %-d, %Y").to_string(),
            Self::Week => {
                let end = start + Duration::days(6);
                format!("{} - {}", short_date(start), short_date(end))
            }
            Self::Month => start.format("%B %Y").to_string(),
            Self::Year => start.format("%Y").to_string(),
        }
    }

    /// Compact label used on the previous/next buttons
    pub fn short_label(self, start: NaiveDate) -> String {
        match self {
            Self::Day | Self::Week => short_date(start),
            Self::Month => start.format("%B %Y").to_string(),
            Self::Year => start.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        write!(f, "{}", name)
    }
}

fn shift_months(start: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    }
}

fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_names_round_trip() {
        for unit in CalendarUnit::ALL {
            assert_eq!(CalendarUnit::from_period_name(unit.period_name()), Some(unit));
        }
        assert_eq!(CalendarUnit::from_period_name("biweekly"), None);
        assert_eq!(CalendarUnit::from_period_name("Daily"), None);
    }

    #[test]
    fn test_truncate() {
        // 2024-03-15 is a Friday
        let friday = date(2024, 3, 15);
        assert_eq!(CalendarUnit::Day.truncate(friday), friday);
        assert_eq!(CalendarUnit::Week.truncate(friday), date(2024, 3, 11));
        assert_eq!(CalendarUnit::Month.truncate(friday), date(2024, 3, 1));
        assert_eq!(CalendarUnit::Year.truncate(friday), date(2024, 1, 1));

        // Sunday belongs to the week that started the previous Monday
        assert_eq!(CalendarUnit::Week.truncate(date(2024, 3, 17)), date(2024, 3, 11));
    }

    #[test]
    fn test_month_step_clamps_instead_of_overflowing() {
        assert_eq!(CalendarUnit::Month.step(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(CalendarUnit::Month.step(date(2024, 1, 1), -1), Some(date(2023, 12, 1)));
        assert_eq!(CalendarUnit::Year.step(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_end_of_period() {
        assert_eq!(CalendarUnit::Day.end(date(2024, 3, 15)), Some(date(2024, 3, 15)));
        assert_eq!(CalendarUnit::Week.end(date(2024, 3, 11)), Some(date(2024, 3, 17)));
        assert_eq!(CalendarUnit::Month.end(date(2024, 2, 1)), Some(date(2024, 2, 29)));
        assert_eq!(CalendarUnit::Year.end(date(2023, 1, 1)), Some(date(2023, 12, 31)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CalendarUnit::Day.label(date(2024, 3, 15)), "Mar 15, 2024");
        assert_eq!(CalendarUnit::Week.label(date(2024, 3, 11)), "3/11/2024 - 3/17/2024");
        assert_eq!(CalendarUnit::Month.label(date(2024, 3, 1)), "March 2024");
        assert_eq!(CalendarUnit::Year.label(date(2024, 1, 1)), "2024");
        assert_eq!(CalendarUnit::Day.short_label(date(2024, 3, 14)), "3/14/2024");
    }
}
