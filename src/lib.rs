//! Current-week fantasy player pool client
//!
//! Fetches the player pool for the game's active scoring week, keeps one week
//! of it cached client-side, and normalizes the fields a lineup screen shows.
//!
//! ## Features
//!
//! - **Week-keyed cache**: the list is reused while the server reports the same
//!   week and replaced wholesale when the week changes
//! - **Display normalization**: `"LeBron James"` becomes `"L.James"`, home/away
//!   flags come from the `"HOME vs AWAY"` matchup, projections round to 2 decimals
//! - **Salary ordering**: highest FanDuel salary first
//! - **Pluggable collaborators**: any [`api::ApiClient`] and [`storage::PlayerStore`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pak_players::{api::HttpApiClient, players::PlayerService, storage::SqliteStore};
//!
//! # async fn example() -> pak_players::Result<()> {
//! let api = HttpApiClient::new("https://example.com/api/", None, Duration::from_secs(30))?;
//! let mut service = PlayerService::new(api, SqliteStore::new()?);
//!
//! for player in service.get_players().await? {
//!     println!("{} {:?}", player.label(), player.fan_duel_salary);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PAK_API_BASE_URL=https://example.com/api/
//! export PAK_API_TOKEN=...   # optional
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod players;
pub mod storage;

// Re-export commonly used types
pub use cli::types::Week;
pub use error::{PakError, Result};
pub use players::{PlayerGame, PlayerService, WeekDescriptor};

pub const BASE_URL_ENV_VAR: &str = "PAK_API_BASE_URL";
pub const TOKEN_ENV_VAR: &str = "PAK_API_TOKEN";
