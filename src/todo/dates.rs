//! Calendar arithmetic for schedules.
//!
//! All dates in the db are plain `YYYY-MM-DD` strings; this module is the
//! only place that parses and formats them. Month and year shifts use
//! standard calendar behavior: landing on a shorter month clamps to that
//! month's last day.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{Result, TodoError};
use crate::model::RepeatPeriod;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string. Malformed input fails loudly; silently
/// defaulting would corrupt schedule math.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TodoError::DateParse(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// True iff `date` is the last calendar day of its month (Feb 28 in common
/// years, Feb 29 in leap years).
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.checked_add_days(Days::new(1)) {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// The last calendar day of `date`'s month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    // First day of the following month, minus one day.
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .unwrap_or(date)
}

/// Adds one period: 7 days, 1 calendar month, or 1 calendar year. Month and
/// year shifts clamp to the target month's last day when the literal day
/// does not exist there (Jan 31 + 1 month = Feb 29 in 2024).
pub fn shift_by_period(date: NaiveDate, period: RepeatPeriod) -> Result<NaiveDate> {
    let shifted = match period {
        RepeatPeriod::Never => return Err(TodoError::InvalidPeriod),
        RepeatPeriod::Week => date.checked_add_days(Days::new(7)),
        RepeatPeriod::Month => date.checked_add_months(Months::new(1)),
        RepeatPeriod::Year => date.checked_add_months(Months::new(12)),
    };
    shifted.ok_or(TodoError::DateRange)
}
