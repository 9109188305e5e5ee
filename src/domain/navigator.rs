use crate::domain::{
    DateRange, MAX_YEAR, MIN_YEAR, PeriodCalendar, PeriodError, PeriodKey, ValidatedPeriod,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One neighbouring period as a link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub key: PeriodKey,
    pub start: NaiveDate,
    pub path: String,
    pub label: String,
}

/// Everything a leaderboard page needs to know about where it sits in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub current: PeriodKey,
    pub range: DateRange,
    /// `None` only when the step would leave the accepted year range
    pub previous: Option<Neighbor>,
    /// Populated even for the current period. Whether to show it is up to
    /// the caller, see `is_current`.
    pub next: Option<Neighbor>,
    pub is_current: bool,
    pub display_label: String,
}

impl PeriodCalendar {
    pub fn navigate(
        &self,
        period: &ValidatedPeriod,
        now: DateTime<Utc>,
    ) -> Result<Navigation, PeriodError> {
        let unit = period.unit();
        let start = period.start();

        let range = period.range().ok_or(PeriodError::InvalidDate)?;
        let previous = self.neighbor(period, -1);
        let next = self.neighbor(period, 1);

        Ok(Navigation {
            current: period.key(),
            range,
            previous,
            next,
            is_current: start == self.current_start(unit, now),
            display_label: unit.label(start),
        })
    }

    /// The period `delta` units away, if the validator would accept it
    fn neighbor(&self, period: &ValidatedPeriod, delta: i32) -> Option<Neighbor> {
        let unit = period.unit();
        let start = unit.step(period.start(), delta)?;
        let key = PeriodKey::containing(unit, start);
        if !(MIN_YEAR..=MAX_YEAR).contains(&i64::from(key.year())) {
            return None;
        }

        Some(Neighbor {
            key,
            start,
            path: key.path(self.base_path()),
            label: unit.short_label(start),
        })
    }
}
