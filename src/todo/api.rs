//! # API Facade
//!
//! The single entry point for all todo operations. Each method follows the
//! same shape: load the db from the store, run one command over it, save the
//! db if the command mutates it, and return the command's structured result.
//!
//! The facade does no business logic (that lives in `commands/*.rs`) and no
//! terminal I/O. It is generic over [`DataStore`], so tests run against
//! `InMemoryStore` and production against `FileStore`. The wall clock is
//! injected: methods take `today` / `now` from the caller.

use chrono::NaiveDate;

use crate::commands;
use crate::error::Result;
use crate::model::RepeatPeriod;
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, words: &[String]) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::add::run(&mut db, words)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn done(&mut self, n: usize, now: i64) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::status::done(&mut db, n, now)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn redo(&mut self, n: usize, now: i64) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::status::redo(&mut db, n, now)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn edit(&mut self, n: usize, words: &[String]) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::edit::run(&mut db, n, words)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn delete(&mut self, n: usize) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::delete::run(&mut db, n)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn clean(&mut self) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::delete::clean(&mut db)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        let db = self.store.load()?;
        commands::list::run(&db)
    }

    /// The daily refresh. The mutated db is durably saved before this
    /// returns; the short-circuit path saves nothing.
    pub fn refresh(&mut self, today: NaiveDate, force: bool) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let before = db.clone();
        let result = commands::refresh::run(&mut db, today, force)?;
        if db != before {
            self.store.save(&db)?;
        }
        Ok(result)
    }

    pub fn make_schedule(
        &mut self,
        n: usize,
        period: RepeatPeriod,
        start: NaiveDate,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::schedule::run_make(&mut db, n, period, start, today)?;
        self.store.save(&db)?;
        Ok(result)
    }

    pub fn stop_schedule(&mut self, n: usize, now: i64) -> Result<commands::CmdResult> {
        let mut db = self.store.load()?;
        let result = commands::schedule::run_stop(&mut db, n, now)?;
        self.store.save(&db)?;
        Ok(result)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;
    use crate::model::TodoStatus;
    use crate::store::memory::InMemoryStore;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn add_then_list_round_trip() {
        let mut api = TodoApi::new(InMemoryStore::new());
        api.add(&words("buy more beer")).unwrap();
        api.add(&words("call mom")).unwrap();

        let result = api.list().unwrap();
        assert_eq!(result.todo.len(), 2);
        // Prepended: the newest item sits at position 0.
        assert_eq!(result.todo[0].1.event, "call mom");
        assert_eq!(result.todo[0].0, 0);
    }

    #[test]
    fn failed_command_does_not_persist() {
        let mut api = TodoApi::new(InMemoryStore::new());
        api.add(&words("only item")).unwrap();
        assert!(api.done(7, 100).is_err());

        let db = api.store().load().unwrap();
        assert_eq!(db.items[0].status, TodoStatus::Incomplete);
    }

    #[test]
    fn schedule_then_refresh_lifecycle() {
        let mut api = TodoApi::new(InMemoryStore::new());
        api.add(&words("water plants")).unwrap();

        let today = parse_date("2024-06-03").unwrap();
        api.make_schedule(1, RepeatPeriod::Week, today, today)
            .unwrap();
        // Due today, next occurrence precomputed.
        let db = api.store().load().unwrap();
        assert_eq!(db.items[0].status, TodoStatus::Incomplete);
        assert_eq!(db.items[0].next_date, "2024-06-10");

        api.done(1, 999).unwrap();
        let db = api.store().load().unwrap();
        assert_eq!(db.items[0].status, TodoStatus::Waiting);

        // A week later the refresh wakes it and advances the schedule.
        api.refresh(parse_date("2024-06-10").unwrap(), false).unwrap();
        let db = api.store().load().unwrap();
        assert_eq!(db.items[0].status, TodoStatus::Incomplete);
        assert_eq!(db.items[0].next_date, "2024-06-17");
        assert_eq!(db.last_refreshed, "2024-06-10");
    }

    #[test]
    fn refresh_no_op_does_not_rewrite_the_store() {
        let mut api = TodoApi::new(InMemoryStore::new());
        api.add(&words("x")).unwrap();
        let today = parse_date("2024-06-10").unwrap();

        api.refresh(today, false).unwrap();
        let first = api.store().load().unwrap();
        api.refresh(today, false).unwrap();
        assert_eq!(api.store().load().unwrap(), first);
    }
}
