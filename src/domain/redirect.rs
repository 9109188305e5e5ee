use crate::domain::{CalendarUnit, PeriodCalendar, PeriodError, PeriodKey};
use chrono::{DateTime, Utc};

impl PeriodCalendar {
    /// Canonical path of the current daily/weekly/monthly/yearly board
    pub fn resolve_current(
        &self,
        period_name: &str,
        now: DateTime<Utc>,
    ) -> Result<String, PeriodError> {
        let unit = CalendarUnit::from_period_name(period_name)
            .ok_or_else(|| PeriodError::InvalidPeriodName(period_name.to_string()))?;

        Ok(self.current_key(unit, now).path(self.base_path()))
    }

    pub fn current_key(&self, unit: CalendarUnit, now: DateTime<Utc>) -> PeriodKey {
        PeriodKey::containing(unit, self.today(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_each_period() {
        let calendar = PeriodCalendar::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();

        assert_eq!(
            calendar.resolve_current("daily", now).unwrap(),
            "/products/leaderboards/daily/2024/3/15"
        );
        assert_eq!(
            calendar.resolve_current("weekly", now).unwrap(),
            "/products/leaderboards/weekly/2024/11"
        );
        assert_eq!(
            calendar.resolve_current("monthly", now).unwrap(),
            "/products/leaderboards/monthly/2024/3"
        );
        assert_eq!(
            calendar.resolve_current("yearly", now).unwrap(),
            "/products/leaderboards/yearly/2024"
        );
    }

    #[test]
    fn test_unknown_period_name() {
        let calendar = PeriodCalendar::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();

        let err = calendar.resolve_current("biweekly", now).unwrap_err();
        assert_eq!(err, PeriodError::InvalidPeriodName("biweekly".to_string()));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_weekly_redirect_near_new_year() {
        // Dec 31 2024 falls in ISO week 1 of 2025
        let calendar = PeriodCalendar::default();
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
        assert_eq!(
            calendar.resolve_current("weekly", now).unwrap(),
            "/products/leaderboards/weekly/2025/1"
        );
    }

    #[test]
    fn test_redirect_uses_custom_base_path() {
        let calendar = PeriodCalendar::new(chrono_tz::UTC, "/boards/");
        let now = Utc.with_ymd_and_hms(2024, 3, 16, 3, 0, 0).unwrap();
        assert_eq!(calendar.resolve_current("daily", now).unwrap(), "/boards/daily/2024/3/16");
    }
}
