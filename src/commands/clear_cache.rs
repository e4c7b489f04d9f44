//! Clear-cache command implementation

use crate::{
    storage::{PlayerStore, SqliteStore},
    Result,
};

/// Remove the cached week metadata and player list
pub fn handle_clear_cache() -> Result<()> {
    let mut store = SqliteStore::new()?;
    store.clear()?;
    println!("✓ Player cache cleared");
    Ok(())
}
