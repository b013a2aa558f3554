//! Calendar cadence units -- whole-unit differencing and stepping over dates.
//!
//! Every cadence is calendar-field based rather than a fixed span: a month step
//! lands on the same day-of-month (clamped to the month's last day), and month
//! differences only count a month once its day-of-month has been reached.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

/// The fixed step between two successive occurrences of a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Number of whole units from `from` to `to`, truncated toward zero.
    ///
    /// Negative when `to` is before `from`. 13 days is one week; Jan 31 to
    /// Feb 28 is zero months.
    pub fn units_between(self, from: NaiveDate, to: NaiveDate) -> i64 {
        match self {
            Frequency::Daily => to.signed_duration_since(from).num_days(),
            Frequency::Weekly => to.signed_duration_since(from).num_days() / 7,
            Frequency::Monthly => {
                // Pack (month, day) so a partial month truncates the same way in
                // both directions.
                let packed = |d: NaiveDate| {
                    (i64::from(d.year()) * 12 + i64::from(d.month0())) * 32 + i64::from(d.day())
                };
                (packed(to) - packed(from)) / 32
            }
        }
    }

    /// `date` moved by `units` whole units (backwards when negative).
    ///
    /// Returns `None` if the result is outside chrono's date range.
    pub fn plus(self, date: NaiveDate, units: i64) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => add_days(date, units),
            Frequency::Weekly => add_days(date, units.checked_mul(7)?),
            Frequency::Monthly => {
                let months = Months::new(u32::try_from(units.unsigned_abs()).ok()?);
                if units >= 0 {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
        }
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let span = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(span)
    } else {
        date.checked_sub_days(span)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(AgendaError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_difference_truncates() {
        let start = date(2020, 11, 1);
        assert_eq!(Frequency::Weekly.units_between(start, date(2020, 11, 14)), 1);
        assert_eq!(Frequency::Weekly.units_between(start, date(2020, 11, 15)), 2);
        assert_eq!(Frequency::Weekly.units_between(date(2020, 11, 14), start), -1);
    }

    #[test]
    fn monthly_difference_waits_for_day_of_month() {
        assert_eq!(
            Frequency::Monthly.units_between(date(2021, 1, 31), date(2021, 2, 28)),
            0
        );
        assert_eq!(
            Frequency::Monthly.units_between(date(2021, 1, 15), date(2021, 2, 15)),
            1
        );
        assert_eq!(
            Frequency::Monthly.units_between(date(2021, 3, 15), date(2021, 1, 20)),
            -1
        );
    }

    #[test]
    fn monthly_step_clamps_to_month_end() {
        assert_eq!(
            Frequency::Monthly.plus(date(2021, 1, 31), 1),
            Some(date(2021, 2, 28))
        );
        assert_eq!(
            Frequency::Monthly.plus(date(2020, 1, 31), 1),
            Some(date(2020, 2, 29))
        );
    }

    #[test]
    fn negative_steps_move_backwards() {
        assert_eq!(
            Frequency::Daily.plus(date(2021, 3, 1), -1),
            Some(date(2021, 2, 28))
        );
        assert_eq!(
            Frequency::Monthly.plus(date(2021, 3, 31), -1),
            Some(date(2021, 2, 28))
        );
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(Frequency::Daily.plus(NaiveDate::MAX, 1), None);
        assert_eq!(Frequency::Weekly.plus(date(2021, 1, 1), i64::MAX), None);
    }
}
