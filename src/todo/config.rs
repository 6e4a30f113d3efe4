use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

const CONFIG_FILENAME: &str = "todo-config.json";
const DB_FILENAME: &str = "todo-db.json";

/// Configuration for todo, stored as `todo-config.json` in the platform
/// config directory. The db location is configurable so the db file can live
/// in a synced folder while the config stays local.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Absolute path of the todo db file.
    pub db_path: PathBuf,
}

impl TodoConfig {
    /// A config pointing at the default db location inside `config_dir`.
    pub fn default_in<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            db_path: config_dir.as_ref().join(DB_FILENAME),
        }
    }

    /// Load config from the given directory, or return the default for that
    /// directory if no config file exists yet.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default_in(config_dir));
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    pub fn config_path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_db_lives_next_to_config() {
        let config = TodoConfig::default_in("/tmp/todo-conf");
        assert_eq!(config.db_path, PathBuf::from("/tmp/todo-conf/todo-db.json"));
    }

    #[test]
    fn load_missing_config_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TodoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TodoConfig::default_in(temp_dir.path()));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = TodoConfig {
            db_path: PathBuf::from("/somewhere/synced/todo-db.json"),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = TodoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            TodoConfig::load(temp_dir.path()),
            Err(TodoError::Serialization(_))
        ));
    }
}
