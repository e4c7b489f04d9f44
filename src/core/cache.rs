//! File system locations and helpers for cached data

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};


/// Directory name under the platform cache dir
pub const CACHE_DIR_NAME: &str = "pak-players";

/// Path: ~/.cache/pak-players (platform equivalent elsewhere)
pub fn cache_root() -> Option<PathBuf> {
    let base = dirs::cache_dir().or_else(|| dirs::home_dir().map(|home| home.join(".cache")))?;
    Some(base.join(CACHE_DIR_NAME))
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
