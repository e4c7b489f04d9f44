//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use pak_players::{
    cli::{Cli, Commands},
    commands::{
        clear_cache::handle_clear_cache,
        players::{handle_players, PlayersParams},
        week::handle_week,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Cli::parse();

    match app.command {
        Commands::Players {
            connection,
            json,
            limit,
            output,
        } => handle_players(PlayersParams {
            options: connection.into(),
            as_json: json,
            limit,
            output,
        })
        .await
        .context("failed to load players")?,

        Commands::Week { json } => handle_week(json).context("failed to read cached week")?,

        Commands::ClearCache => handle_clear_cache().context("failed to clear cache")?,
    }

    Ok(())
}
