use crate::domain::CalendarUnit;
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive span of days covered by one leaderboard period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub unit: CalendarUnit,
}

impl DateRange {
    /// Range of the period of `unit` that contains `date`
    pub fn containing(unit: CalendarUnit, date: NaiveDate) -> Option<Self> {
        let start = unit.truncate(date);
        let end = unit.end(start)?;
        Some(Self { start, end, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_range() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let range = DateRange::containing(CalendarUnit::Week, date).unwrap();

        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
        assert_eq!(range.unit, CalendarUnit::Week);
    }

    #[test]
    fn test_leap_year_range() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let year = DateRange::containing(CalendarUnit::Year, date).unwrap();
        assert_eq!(year.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

        let leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let feb = DateRange::containing(CalendarUnit::Month, leap).unwrap();
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let common = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        let feb = DateRange::containing(CalendarUnit::Month, common).unwrap();
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }
}
