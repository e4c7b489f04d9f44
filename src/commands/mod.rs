//! Command implementations for the pak-players CLI

pub mod clear_cache;
pub mod players;
pub mod week;

use std::time::Duration;

use crate::{
    api::HttpApiClient,
    storage::{MemoryStore, PlayerStore, SqliteStore},
    PakError, Result, BASE_URL_ENV_VAR, TOKEN_ENV_VAR,
};

/// Connection and storage options shared by every subcommand
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Keep the cache in memory for this run instead of the SQLite file
    pub memory: bool,
}

/// CLI flag first, then `PAK_API_BASE_URL`.
pub fn resolve_base_url(base_url: Option<String>) -> Result<String> {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| PakError::MissingBaseUrl {
            env_var: BASE_URL_ENV_VAR.to_string(),
        })
}

/// CLI flag first, then `PAK_API_TOKEN`. Absent means anonymous requests.
pub fn resolve_token(token: Option<String>) -> Option<String> {
    token
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
}

pub fn build_api_client(options: &ClientOptions) -> Result<HttpApiClient> {
    let base_url = resolve_base_url(options.base_url.clone())?;
    let token = resolve_token(options.token.clone());
    HttpApiClient::new(
        &base_url,
        token.as_deref(),
        Duration::from_secs(options.timeout_secs),
    )
}

pub fn open_store(memory: bool) -> Result<Box<dyn PlayerStore>> {
    if memory {
        Ok(Box::new(MemoryStore::new()))
    } else {
        Ok(Box::new(SqliteStore::new()?))
    }
}
