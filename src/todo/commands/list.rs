//! The classifier: partitions items into the three display views.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{TodoDb, TodoItem};

/// Read-only indexed views into one item list. Each entry pairs an item with
/// its original list position, so callers can address items positionally for
/// later mutation; items are borrowed, never copied into a second owning
/// structure that could drift.
#[derive(Debug, Default)]
pub struct Classified<'a> {
    /// `Incomplete` items, newest first.
    pub todo: Vec<(usize, &'a TodoItem)>,
    /// Items with a recorded completion time, most recent first.
    pub done: Vec<(usize, &'a TodoItem)>,
    /// Repeating items, soonest due first.
    pub scheduled: Vec<(usize, &'a TodoItem)>,
}

/// Partitions `items` into the Todo / Done / Scheduled views.
///
/// The three predicates are evaluated independently against the full list;
/// an item may appear in more than one view (a repeating item that is
/// currently incomplete is in both `todo` and `scheduled`).
pub fn classify(items: &[TodoItem]) -> Classified<'_> {
    let mut views = Classified::default();
    for (idx, item) in items.iter().enumerate() {
        if item.status == crate::model::TodoStatus::Incomplete {
            views.todo.push((idx, item));
        }
        if item.is_done() {
            views.done.push((idx, item));
        }
        if item.is_repeating() {
            views.scheduled.push((idx, item));
        }
    }
    views.todo.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
    views.done.sort_by(|a, b| b.1.done_at.cmp(&a.1.done_at));
    // YYYY-MM-DD strings order the same way the dates do.
    views
        .scheduled
        .sort_by(|a, b| a.1.next_date.cmp(&b.1.next_date));
    views
}

/// Builds the list output: the three classified views plus the motto.
pub fn run(db: &TodoDb) -> Result<CmdResult> {
    let views = classify(&db.items);

    let own = |v: Vec<(usize, &TodoItem)>| -> Vec<(usize, TodoItem)> {
        v.into_iter().map(|(i, item)| (i, item.clone())).collect()
    };

    let mut result = CmdResult::default();
    result.todo = own(views.todo);
    result.done = own(views.done);
    result.scheduled = own(views.scheduled);
    result.motto = db.mottos.first().cloned();
    Ok(result)
}
