use crate::domain::{CalendarUnit, DateRange, PeriodError};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Integer components identifying one period of a given unit.
///
/// Weeks are addressed by ISO week-year and ISO week number, so the first
/// days of January can belong to week 52/53 of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum PeriodKey {
    Day { year: i32, month: u32, day: u32 },
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Year { year: i32 },
}

impl PeriodKey {
    /// Key of the period of `unit` starting at (or containing) `date`
    pub fn containing(unit: CalendarUnit, date: NaiveDate) -> Self {
        let start = unit.truncate(date);
        match unit {
            CalendarUnit::Day => Self::Day {
                year: start.year(),
                month: start.month(),
                day: start.day(),
            },
            CalendarUnit::Week => {
                let iso = start.iso_week();
                Self::Week {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
            CalendarUnit::Month => Self::Month {
                year: start.year(),
                month: start.month(),
            },
            CalendarUnit::Year => Self::Year { year: start.year() },
        }
    }

    pub fn unit(&self) -> CalendarUnit {
        match self {
            Self::Day { .. } => CalendarUnit::Day,
            Self::Week { .. } => CalendarUnit::Week,
            Self::Month { .. } => CalendarUnit::Month,
            Self::Year { .. } => CalendarUnit::Year,
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            Self::Day { year, .. }
            | Self::Week { year, .. }
            | Self::Month { year, .. }
            | Self::Year { year } => year,
        }
    }

    /// First day of the period, or `None` when the components are not a real
    /// calendar position
    pub fn resolve(&self) -> Option<NaiveDate> {
        match *self {
            Self::Day { year, month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::Week { year, week } => NaiveDate::from_isoywd_opt(year, week, Weekday::Mon),
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1),
            Self::Year { year } => NaiveDate::from_ymd_opt(year, 1, 1),
        }
    }

    /// Path segments in URL order, unpadded
    pub fn segments(&self) -> Vec<String> {
        match *self {
            Self::Day { year, month, day } => {
                vec![year.to_string(), month.to_string(), day.to_string()]
            }
            Self::Week { year, week } => vec![year.to_string(), week.to_string()],
            Self::Month { year, month } => vec![year.to_string(), month.to_string()],
            Self::Year { year } => vec![year.to_string()],
        }
    }

    /// Canonical leaderboard path, e.g. `/products/leaderboards/daily/2024/3/15`
    pub fn path(&self, base_path: &str) -> String {
        let mut path = format!(
            "{}/{}",
            base_path.trim_end_matches('/'),
            self.unit().period_name()
        );
        for segment in self.segments() {
            path.push('/');
            path.push_str(&segment);
        }
        path
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Week { year, week } => write!(f, "week {}, {}", week, year),
            _ => write!(f, "{}", self.segments().join("-")),
        }
    }
}

/// Raw, user supplied period components keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawComponents {
    fields: BTreeMap<String, String>,
}

impl RawComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Assign positional path segments to the unit's fields in URL order.
    ///
    /// Missing trailing segments are left absent so the validator reports
    /// them; surplus segments are rejected outright.
    pub fn from_segments<S: AsRef<str>>(
        unit: CalendarUnit,
        segments: &[S],
    ) -> Result<Self, PeriodError> {
        let fields = unit.required_fields();
        if segments.len() > fields.len() {
            return Err(PeriodError::InvalidParams);
        }

        Ok(Self {
            fields: fields
                .iter()
                .zip(segments)
                .map(|(field, value)| (field.to_string(), value.as_ref().to_string()))
                .collect(),
        })
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

impl From<&PeriodKey> for RawComponents {
    fn from(key: &PeriodKey) -> Self {
        let fields = key
            .unit()
            .required_fields()
            .iter()
            .zip(key.segments())
            .map(|(field, value)| (field.to_string(), value))
            .collect();
        Self { fields }
    }
}

/// A period proven to exist and to have started, truncated to its unit.
///
/// Only [`PeriodCalendar::validate`](crate::domain::PeriodCalendar::validate)
/// hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedPeriod {
    unit: CalendarUnit,
    start: NaiveDate,
}

impl ValidatedPeriod {
    pub(crate) fn new(unit: CalendarUnit, start: NaiveDate) -> Self {
        Self {
            unit,
            start: unit.truncate(start),
        }
    }

    pub fn unit(&self) -> CalendarUnit {
        self.unit
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn key(&self) -> PeriodKey {
        PeriodKey::containing(self.unit, self.start)
    }

    pub fn range(&self) -> Option<DateRange> {
        DateRange::containing(self.unit, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unpadded() {
        let key = PeriodKey::Day {
            year: 2024,
            month: 3,
            day: 5,
        };
        assert_eq!(key.path("/products/leaderboards"), "/products/leaderboards/daily/2024/3/5");
        assert_eq!(
            PeriodKey::Week { year: 2024, week: 9 }.path("/boards/"),
            "/boards/weekly/2024/9"
        );
        assert_eq!(PeriodKey::Year { year: 2021 }.path(""), "/yearly/2021");
    }

    #[test]
    fn test_iso_week_year_at_year_boundary() {
        // 2024-12-30 is the Monday of ISO week 1 of 2025
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let key = PeriodKey::containing(CalendarUnit::Week, date);
        assert_eq!(key, PeriodKey::Week { year: 2025, week: 1 });
        assert_eq!(key.resolve(), NaiveDate::from_ymd_opt(2024, 12, 30));
    }

    #[test]
    fn test_resolve_rejects_impossible_components() {
        assert!(PeriodKey::Day { year: 2023, month: 2, day: 29 }.resolve().is_none());
        assert!(PeriodKey::Month { year: 2024, month: 13 }.resolve().is_none());
        assert!(PeriodKey::Week { year: 2024, week: 53 }.resolve().is_none());
        assert!(PeriodKey::Week { year: 2020, week: 53 }.resolve().is_some());
    }

    #[test]
    fn test_segments_map_onto_fields() {
        let raw = RawComponents::from_segments(CalendarUnit::Day, &["2024", "3", "15"]).unwrap();
        assert_eq!(raw.get("year"), Some("2024"));
        assert_eq!(raw.get("month"), Some("3"));
        assert_eq!(raw.get("day"), Some("15"));

        let partial = RawComponents::from_segments(CalendarUnit::Month, &["2024"]).unwrap();
        assert_eq!(partial.get("month"), None);

        assert_eq!(
            RawComponents::from_segments(CalendarUnit::Year, &["2024", "1"]),
            Err(PeriodError::InvalidParams)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PeriodKey::Day { year: 2024, month: 3, day: 15 }.to_string(), "2024-3-15");
        assert_eq!(PeriodKey::Week { year: 2024, week: 11 }.to_string(), "week 11, 2024");
        assert_eq!(PeriodKey::Month { year: 2024, month: 3 }.to_string(), "2024-3");
    }
}
