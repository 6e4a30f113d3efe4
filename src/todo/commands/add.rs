use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{TodoDb, TodoItem};

use super::helpers::clean_event_text;

/// Adds a new item to the front of the list.
pub fn run(db: &mut TodoDb, words: &[String]) -> Result<CmdResult> {
    let event = clean_event_text(words)?;
    let item = TodoItem::new(event);
    db.items.insert(0, item.clone());

    Ok(CmdResult::default()
        .with_affected(vec![item.clone()])
        .with_message(CmdMessage::success(format!("Added: {}", item.event))))
}
