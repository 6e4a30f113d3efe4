//! Establishing and stopping repeat schedules.

use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::dates::format_date;
use crate::error::{Result, TodoError};
use crate::model::{RepeatPeriod, TodoDb, TodoItem, TodoStatus};
use crate::recur::next_occurrence;

use super::helpers::resolve_number;

/// Whether a schedule operation actually changed the item. `NoChange` is not
/// a failure, but callers surface it as a warning instead of silently
/// succeeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Changed,
    NoChange,
}

/// Turns `item` into a repeating item starting at `start`.
///
/// Scheduling into the past is rejected; scheduling for today is allowed and
/// makes the item due immediately, with the following occurrence precomputed
/// so the next refresh knows when to re-arm. A scheduled item cannot keep a
/// stale completion timestamp.
pub fn make_schedule(
    item: &mut TodoItem,
    period: RepeatPeriod,
    start: NaiveDate,
    today: NaiveDate,
) -> Result<()> {
    if period.is_never() {
        return Err(TodoError::InvalidPeriod);
    }
    if start < today {
        return Err(TodoError::PastStartDate(start));
    }

    item.done_at = 0;
    item.repeat = period;
    item.start_date = format_date(start);

    if start > today {
        // First occurrence is in the future; nothing to do until then.
        item.status = TodoStatus::Waiting;
        item.next_date = item.start_date.clone();
    } else {
        // Due immediately; next_date points at the following occurrence.
        item.status = TodoStatus::Incomplete;
        item.next_date = format_date(next_occurrence(start, start, period, today)?);
    }
    Ok(())
}

/// Stops `item`'s schedule.
///
/// A completed recurring item becomes a normal terminal completion and gets
/// a done-time; a waiting item rejoins the todo list.
pub fn stop_schedule(item: &mut TodoItem, now: i64) -> ScheduleOutcome {
    if item.repeat.is_never() {
        return ScheduleOutcome::NoChange;
    }

    item.repeat = RepeatPeriod::Never;
    item.start_date.clear();
    item.next_date.clear();
    match item.status {
        TodoStatus::Completed => item.done_at = now,
        TodoStatus::Waiting => item.status = TodoStatus::Incomplete,
        TodoStatus::Incomplete => {}
    }
    ScheduleOutcome::Changed
}

/// The `repeat N --every ... [--from ...]` command.
pub fn run_make(
    db: &mut TodoDb,
    n: usize,
    period: RepeatPeriod,
    start: NaiveDate,
    today: NaiveDate,
) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let item = &mut db.items[idx];
    make_schedule(item, period, start, today)?;

    Ok(CmdResult::default()
        .with_affected(vec![item.clone()])
        .with_message(CmdMessage::success(format!(
            "Repeats every {}, next on {}: {}",
            item.repeat, item.next_date, item.event
        ))))
}

/// The `repeat N --stop` command.
pub fn run_stop(db: &mut TodoDb, n: usize, now: i64) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let item = &mut db.items[idx];

    let mut result = CmdResult::default();
    match stop_schedule(item, now) {
        ScheduleOutcome::NoChange => {
            result.add_message(CmdMessage::warning(format!(
                "It is not set to repeat, nothing changes: {}",
                item.event
            )));
        }
        ScheduleOutcome::Changed => {
            result.add_message(CmdMessage::success(format!(
                "Stopped repeating: {}",
                item.event
            )));
            result.affected.push(item.clone());
        }
    }
    Ok(result)
}
