use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoDb;

use super::helpers::{clean_event_text, resolve_number};

/// Replaces the text of item `n`.
pub fn run(db: &mut TodoDb, n: usize, words: &[String]) -> Result<CmdResult> {
    let idx = resolve_number(db, n)?;
    let event = clean_event_text(words)?;

    let item = &mut db.items[idx];
    let old = std::mem::replace(&mut item.event, event);

    Ok(CmdResult::default()
        .with_affected(vec![item.clone()])
        .with_message(CmdMessage::success(format!(
            "Changed '{}' to '{}'",
            old, item.event
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DbFixture;

    #[test]
    fn replaces_item_text() {
        let mut db = DbFixture::new().with_item("by more beer", 1).db;
        let words = vec!["buy".to_string(), "more".to_string(), "beer".to_string()];
        run(&mut db, 1, &words).unwrap();
        assert_eq!(db.items[0].event, "buy more beer");
    }

    #[test]
    fn empty_replacement_is_rejected() {
        let mut db = DbFixture::new().with_item("keep me", 1).db;
        assert!(run(&mut db, 1, &["  ".to_string()]).is_err());
        assert_eq!(db.items[0].event, "keep me");
    }
}
