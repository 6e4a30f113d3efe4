use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoDb;

use super::helpers::resolve_number;

/// Removes item `n` outright. Use [`clean`] to clear the completed list.
pub fn run(db: &mut TodoDb, n: usize) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let item = db.items.remove(idx);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted: {}",
        item.event
    ))))
}

/// Removes every terminally completed item.
pub fn clean(db: &mut TodoDb) -> Result<CmdResult> {
    let before = db.items.len();
    db.items.retain(|item| !item.is_done());
    let removed = before - db.items.len();

    let message = if removed == 0 {
        CmdMessage::info("The completed list is already empty.")
    } else {
        CmdMessage::success(format!("Removed {} completed item(s).", removed))
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DbFixture;

    #[test]
    fn delete_removes_by_position() {
        let mut db = DbFixture::new().with_item("a", 1).with_item("b", 2).db;
        run(&mut db, 1).unwrap();
        assert_eq!(db.items.len(), 1);
        assert_eq!(db.items[0].event, "b");
    }

    #[test]
    fn clean_removes_only_completed_items() {
        let mut db = DbFixture::new()
            .with_item("keep", 1)
            .with_done_item("drop one", 10)
            .with_done_item("drop two", 20)
            .db;
        let result = clean(&mut db).unwrap();

        assert_eq!(db.items.len(), 1);
        assert_eq!(db.items[0].event, "keep");
        assert!(result.messages[0].content.contains("2"));
    }

    #[test]
    fn clean_on_empty_done_list_is_benign() {
        let mut db = DbFixture::new().with_item("keep", 1).db;
        let result = clean(&mut db).unwrap();
        assert_eq!(db.items.len(), 1);
        assert!(result.messages[0].content.contains("already empty"));
    }
}
