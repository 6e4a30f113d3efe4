//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the todo db document lives.
//!
//! Unlike a per-record store, the whole db is one small JSON document: it is
//! loaded once at the start of an invocation, mutated in memory, and saved
//! once at the end. There is exactly one logical writer per invocation; if
//! two invocations race, last-writer-wins is accepted behavior.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage. Saves go through a
//!   temporary file and an atomic rename, so a crash mid-write leaves the
//!   prior db intact.
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no
//!   persistence.

use crate::error::Result;
use crate::model::TodoDb;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and durably saving the todo db.
pub trait DataStore {
    /// Load the db; a store with no saved db yet yields the default
    /// (empty) db.
    fn load(&self) -> Result<TodoDb>;

    /// Durably save the db. Must not return before the document is safe.
    fn save(&mut self, db: &TodoDb) -> Result<()>;

    /// Where the db lives, for file-based stores.
    fn path(&self) -> Option<&Path> {
        None
    }
}
