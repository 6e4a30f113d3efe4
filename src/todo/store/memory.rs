use super::DataStore;
use crate::error::Result;
use crate::model::TodoDb;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    db: TodoDb,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(db: TodoDb) -> Self {
        Self { db }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<TodoDb> {
        Ok(self.db.clone())
    }

    fn save(&mut self, db: &TodoDb) -> Result<()> {
        self.db = db.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use crate::model::{RepeatPeriod, TodoDb, TodoItem, TodoStatus};

    /// Builds db contents for command tests without going through the API.
    #[derive(Default)]
    pub struct DbFixture {
        pub db: TodoDb,
    }

    impl DbFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(mut self, event: &str, created_at: i64) -> Self {
            let mut item = TodoItem::new(event);
            item.created_at = created_at;
            self.db.items.push(item);
            self
        }

        pub fn with_done_item(mut self, event: &str, done_at: i64) -> Self {
            let mut item = TodoItem::new(event);
            item.status = TodoStatus::Completed;
            item.done_at = done_at;
            self.db.items.push(item);
            self
        }

        pub fn with_waiting_item(
            mut self,
            event: &str,
            period: RepeatPeriod,
            start_date: &str,
            next_date: &str,
        ) -> Self {
            let mut item = TodoItem::new(event);
            item.status = TodoStatus::Waiting;
            item.repeat = period;
            item.start_date = start_date.to_string();
            item.next_date = next_date.to_string();
            self.db.items.push(item);
            self
        }
    }
}
