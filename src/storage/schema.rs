//! Database schema and connection management

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cache::cache_root;
use crate::error::{PakError, Result};

/// SQLite-backed [`PlayerStore`](super::PlayerStore)
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

impl SqliteStore {
    /// Open the store in the user cache directory, creating it if needed.
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) a store at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening player store");
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Store that lives only as long as the value, for tests and `--memory` runs.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Path: <cache_dir>/pak-players/players.db
    pub fn database_path() -> Result<PathBuf> {
        let root = cache_root().ok_or_else(|| PakError::Cache {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(root.join("players.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
