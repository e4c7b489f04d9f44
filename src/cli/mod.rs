//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::http::DEFAULT_TIMEOUT_SECS;
use crate::commands::ClientOptions;

/// Connection arguments shared between commands
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// API root URL (or set `PAK_API_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// API token (or set `PAK_API_TOKEN` env var).
    #[clap(long)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Keep the cache in memory for this run instead of the on-disk database.
    #[clap(long)]
    pub memory: bool,
}

impl From<ConnectionArgs> for ClientOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            base_url: args.base_url,
            token: args.token,
            timeout_secs: args.timeout_secs,
            memory: args.memory,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List this week's players, highest salary first.
    ///
    /// Reuses the cached list while the server reports the same week.
    Players {
        #[clap(flatten)]
        connection: ConnectionArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Only show the first N players.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Also write the full list as JSON to this file.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Show the cached week number and its date range.
    Week {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Remove the cached week and player list.
    ClearCache,
}

#[derive(Debug, Parser)]
#[clap(name = "pak-players", about = "Current-week fantasy player pool")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
