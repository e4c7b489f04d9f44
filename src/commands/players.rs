//! Players command implementation

use std::path::PathBuf;

use super::{build_api_client, open_store, ClientOptions};
use crate::{
    core::write_string,
    players::{CacheStatus, PlayerGame, PlayerService},
    Result,
};

#[derive(Debug, Clone)]
pub struct PlayersParams {
    pub options: ClientOptions,
    pub as_json: bool,
    /// Only print the first N players
    pub limit: Option<usize>,
    /// Also write the full list as JSON to this file
    pub output: Option<PathBuf>,
}

/// Handle the players command
pub async fn handle_players(params: PlayersParams) -> Result<()> {
    let api = build_api_client(&params.options)?;
    let store = open_store(params.options.memory)?;
    let mut service = PlayerService::new(api, store);

    let (players, status) = service.get_players_with_status().await?;
    // stderr so --json output stays parseable
    eprintln!("{}", status_message(status, players.len()));

    if let Some(path) = &params.output {
        write_string(path, &serde_json::to_string_pretty(&players)?)?;
        eprintln!("Player list written to {}", path.display());
    }

    let shown = &players[..params.limit.unwrap_or(players.len()).min(players.len())];
    if params.as_json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        for (rank, player) in shown.iter().enumerate() {
            println!("{}", format_player_line(rank + 1, player));
        }
    }

    Ok(())
}

pub fn status_message(status: CacheStatus, count: usize) -> String {
    match status {
        CacheStatus::Hit => format!("✓ {} players loaded (from cache)", count),
        CacheStatus::Miss => format!("✓ {} players fetched", count),
    }
}

/// One text row: rank, name, team with home/away marker, matchup, salary and projection.
pub fn format_player_line(rank: usize, player: &PlayerGame) -> String {
    let team = player
        .player
        .as_ref()
        .map(|p| p.team.abbr.as_str())
        .filter(|abbr| !abbr.is_empty())
        .unwrap_or("-");

    let side = match (player.from_home, player.from_away) {
        (Some(true), _) => " (H)",
        (_, Some(true)) => " (A)",
        _ => "",
    };

    let matchup = player
        .game
        .as_ref()
        .map(|g| g.vs.as_str())
        .filter(|vs| !vs.is_empty())
        .unwrap_or("-");

    let salary = player
        .fan_duel_salary
        .map(|s| format!("${:.0}", s))
        .unwrap_or_else(|| "-".to_string());

    let projection = player
        .fantasy_points_fan_duel_projection
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>3}. {} {}{} [{}] {} {}",
        rank,
        player.label(),
        team,
        side,
        matchup,
        salary,
        projection
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{transform, GameInfo, PlayerInfo, TeamInfo};

    #[test]
    fn test_format_player_line() {
        let player = transform(PlayerGame {
            player: Some(PlayerInfo {
                name: Some("LeBron James".to_string()),
                team: TeamInfo {
                    abbr: "CLE".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            }),
            game: Some(GameInfo {
                vs: "CLE vs BOS".to_string(),
                ..Default::default()
            }),
            fan_duel_salary: Some(9800.0),
            fantasy_points_fan_duel_projection: Some(48.756),
            ..Default::default()
        });

        assert_eq!(
            format_player_line(1, &player),
            "  1. L.James CLE (H) [CLE vs BOS] $9800 48.76"
        );
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            status_message(CacheStatus::Hit, 42),
            "✓ 42 players loaded (from cache)"
        );
        assert_eq!(status_message(CacheStatus::Miss, 3), "✓ 3 players fetched");
    }

    #[test]
    fn test_format_placeholder_line() {
        let player = transform(PlayerGame::default());
        assert_eq!(format_player_line(12, &player), " 12. - - [-] - -");
    }
}
