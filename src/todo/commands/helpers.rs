use crate::error::{Result, TodoError};
use crate::model::TodoDb;

/// Resolves a user-supplied 1-based list number against the stored list.
///
/// Printed numbers are original list positions, uniform across the Todo,
/// Completed and Schedule sections, so resolution is a bounds check rather
/// than a view lookup. The messages are user-facing.
pub fn resolve_number(db: &TodoDb, n: usize) -> Result<usize> {
    if db.items.is_empty() {
        return Err(TodoError::Api("There is no item in the list.".to_string()));
    }
    if n < 1 {
        return Err(TodoError::Api(
            "Please input a number bigger than zero.".to_string(),
        ));
    }
    let size = db.items.len();
    if n > size {
        let msg = if size == 1 {
            "There is only 1 item.".to_string()
        } else {
            format!("There are only {} items.", size)
        };
        return Err(TodoError::Api(msg));
    }
    Ok(n - 1)
}

/// Trims user-supplied item text, rejecting empty input.
pub fn clean_event_text(words: &[String]) -> Result<String> {
    let text = words.join(" ").trim().to_string();
    if text.is_empty() {
        return Err(TodoError::Api("The item text cannot be empty.".to_string()));
    }
    Ok(text)
}
