//! The once-per-calendar-day schedule refresh.

use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::dates::{format_date, parse_date};
use crate::error::Result;
use crate::model::{TodoDb, TodoStatus};
use crate::recur::next_occurrence;

/// Scans the whole list once per calendar day, flipping due `Waiting` items
/// back to `Incomplete` and advancing their next dates.
///
/// The `last_refreshed` guard makes the scan idempotent within a day;
/// `force` bypasses it (re-running the transitions is harmless, they would
/// recompute to the same values). Malformed persisted dates fail loudly
/// rather than defaulting, since a silent default would corrupt the
/// schedule.
pub fn run(db: &mut TodoDb, today: NaiveDate, force: bool) -> Result<CmdResult> {
    let today_str = format_date(today);
    let mut result = CmdResult::default();

    if !force && db.last_refreshed == today_str {
        result.add_message(CmdMessage::info("Already refreshed today."));
        return Ok(result);
    }
    db.last_refreshed = today_str;

    let mut woken = 0usize;
    for item in &mut db.items {
        if item.status != TodoStatus::Waiting {
            continue;
        }
        let next = parse_date(&item.next_date)?;
        if today >= next {
            let start = parse_date(&item.start_date)?;
            item.status = TodoStatus::Incomplete;
            item.next_date = format_date(next_occurrence(start, next, item.repeat, today)?);
            woken += 1;
            result.affected.push(item.clone());
        }
    }

    if woken > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} scheduled item(s) are due again.",
            woken
        )));
    }
    Ok(result)
}
