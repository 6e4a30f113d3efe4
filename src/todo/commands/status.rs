//! User-driven status transitions: `done` and `redo`. Time-driven
//! transitions (waking `Waiting` items) live in [`super::refresh`].

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{TodoDb, TodoStatus};

use super::helpers::resolve_number;

/// Marks item `n` as completed.
///
/// A recurring item is parked as `Waiting` instead: it never records a
/// completion time, and the next refresh re-arms it once its next date
/// arrives. Only non-repeating completions are terminal and get `done_at`.
pub fn done(db: &mut TodoDb, n: usize, now: i64) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let item = &mut db.items[idx];

    let mut result = CmdResult::default();
    if item.is_repeating() {
        item.status = TodoStatus::Waiting;
        item.done_at = 0;
        result.add_message(CmdMessage::success(format!(
            "Done until {}: {}",
            item.next_date, item.event
        )));
    } else {
        if item.status == TodoStatus::Completed {
            result.add_message(CmdMessage::warning(format!(
                "Already completed, nothing changes: {}",
                item.event
            )));
            return Ok(result);
        }
        item.status = TodoStatus::Completed;
        item.done_at = now;
        result.add_message(CmdMessage::success(format!("Completed: {}", item.event)));
    }

    result.affected.push(item.clone());
    Ok(result)
}

/// Marks item `n` as incomplete again. The creation time is refreshed so the
/// item surfaces at the top of the todo list.
pub fn redo(db: &mut TodoDb, n: usize, now: i64) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let item = &mut db.items[idx];

    item.status = TodoStatus::Incomplete;
    item.created_at = now;
    item.done_at = 0;

    Ok(CmdResult::default()
        .with_affected(vec![item.clone()])
        .with_message(CmdMessage::success(format!("Todo again: {}", item.event))))
}
