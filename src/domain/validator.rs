use crate::domain::{
    CalendarUnit, PeriodCalendar, PeriodError, PeriodKey, RawComponents, ValidatedPeriod,
};
use chrono::{DateTime, Utc};

pub const MIN_YEAR: i64 = 1;
pub const MAX_YEAR: i64 = 9999;

impl PeriodCalendar {
    /// Turn raw path components into a period that exists and has started.
    ///
    /// Missing or non-integer components are `InvalidParams`; integers that do
    /// not name a real day/week/month/year are `InvalidDate`; a period whose
    /// start lies after the start of the current period is `FutureDate`.
    pub fn validate(
        &self,
        unit: CalendarUnit,
        raw: &RawComponents,
        now: DateTime<Utc>,
    ) -> Result<ValidatedPeriod, PeriodError> {
        let values = unit
            .required_fields()
            .iter()
            .map(|field| coerce(raw.get(field)))
            .collect::<Result<Vec<_>, _>>()?;

        let key = build_key(unit, &values).ok_or(PeriodError::InvalidDate)?;
        let start = key.resolve().ok_or(PeriodError::InvalidDate)?;

        if start > self.current_start(unit, now) {
            return Err(PeriodError::FutureDate);
        }

        Ok(ValidatedPeriod::new(unit, start))
    }
}

fn coerce(value: Option<&str>) -> Result<i64, PeriodError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or(PeriodError::InvalidParams)
}

fn build_key(unit: CalendarUnit, values: &[i64]) -> Option<PeriodKey> {
    let year = match values.first() {
        Some(&year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => i32::try_from(year).ok()?,
        _ => return None,
    };
    let part = |i: usize| values.get(i).and_then(|&v| u32::try_from(v).ok());

    Some(match unit {
        CalendarUnit::Day => PeriodKey::Day {
            year,
            month: part(1)?,
            day: part(2)?,
        },
        CalendarUnit::Week => PeriodKey::Week {
            year,
            week: part(1)?,
        },
        CalendarUnit::Month => PeriodKey::Month {
            year,
            month: part(1)?,
        },
        CalendarUnit::Year => PeriodKey::Year { year },
    })
}
