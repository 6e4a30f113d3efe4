//! The recurrence engine.
//!
//! A single `date + period` step is not enough: the tool may not have been
//! run for several periods, and a missed run must still land on a future due
//! date. `next_occurrence` therefore loops, advancing by whole periods until
//! the result is strictly after `today`.

use chrono::NaiveDate;

use crate::dates;
use crate::error::{Result, TodoError};
use crate::model::RepeatPeriod;

/// Computes the next due date for a repeating item.
///
/// Starting from `last_next`, advances by one `period` at a time until the
/// result is strictly after `today`; always advances at least once. Month
/// and year schedules anchored on the last day of `start`'s month stay on
/// month ends (a Jan 31 anchor lands on Feb 29, Mar 31, ...), otherwise
/// ordinary calendar clamping applies per shift.
///
/// Fails with `InvalidPeriod` for `Never` — items without a schedule must
/// never reach this function.
pub fn next_occurrence(
    start: NaiveDate,
    last_next: NaiveDate,
    period: RepeatPeriod,
    today: NaiveDate,
) -> Result<NaiveDate> {
    if period.is_never() {
        return Err(TodoError::InvalidPeriod);
    }
    let month_end_anchor = match period {
        RepeatPeriod::Month | RepeatPeriod::Year => dates::is_last_day_of_month(start),
        _ => false,
    };

    let mut next = last_next;
    loop {
        next = dates::shift_by_period(next, period)?;
        if month_end_anchor {
            next = dates::last_day_of_month(next);
        }
        if next > today {
            return Ok(next);
        }
    }
}
