use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::TodoDb;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    db_path: PathBuf,
}

impl FileStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<TodoDb> {
        if !self.db_path.exists() {
            return Ok(TodoDb::default());
        }
        let content = fs::read_to_string(&self.db_path).map_err(TodoError::Io)?;
        let db: TodoDb = serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(db)
    }

    fn save(&mut self, db: &TodoDb) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(db).map_err(TodoError::Serialization)?;

        // Write-then-rename so the prior db survives a crash mid-write. The
        // db file is the only source of truth; there is no journal.
        let tmp_path = self.db_path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(TodoError::Io)?;
        fs::rename(&tmp_path, &self.db_path).map_err(TodoError::Io)?;
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoItem;

    #[test]
    fn load_missing_file_yields_empty_db() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("todo-db.json"));
        assert_eq!(store.load().unwrap(), TodoDb::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("todo-db.json"));

        let mut db = TodoDb::default();
        db.items.push(TodoItem::new("call the dentist"));
        db.last_refreshed = "2024-06-01".to_string();
        store.save(&db).unwrap();

        assert_eq!(store.load().unwrap(), db);
        // No temp file left behind.
        assert!(!temp_dir.path().join("todo-db.json.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("todo-db.json");
        let mut store = FileStore::new(nested.clone());
        store.save(&TodoDb::default()).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todo-db.json");
        fs::write(&path, "{broken").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(TodoError::Serialization(_))
        ));
    }
}
