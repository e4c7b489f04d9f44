//! Display normalization for player-game records.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

use super::types::PlayerGame;


/// Leading ASCII word followed by whitespace. Names starting with accented
/// letters do not match and keep their full form.
static FIRST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\s").expect("first-name pattern is valid"));

/// Normalize one record for display.
///
/// Real players get home/away flags and a shortened display name. The projection
/// is rounded for every record, placeholders included.
pub fn transform(mut player: PlayerGame) -> PlayerGame {
    if player.player.is_some() {
        add_teams(&mut player);
        truncate_name(&mut player);
    }
    normalize_projection(&mut player);
    player
}

/// Transform every record and order the result by salary, highest first.
pub fn transform_all(players: Vec<PlayerGame>) -> Vec<PlayerGame> {
    let mut players: Vec<PlayerGame> = players.into_iter().map(transform).collect();
    players.sort_by(by_salary);
    players
}

/// Descending salary. Records without a salary go last; `sort_by` is stable so
/// ties keep their API order.
pub fn by_salary(a: &PlayerGame, b: &PlayerGame) -> Ordering {
    match (a.fan_duel_salary, b.fan_duel_salary) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Split `game.vs` into home and away and flag which side the player is on.
fn add_teams(player: &mut PlayerGame) {
    let abbr = player
        .player
        .as_ref()
        .map(|p| p.team.abbr.clone())
        .unwrap_or_default();
    let Some(game) = player.game.as_mut() else {
        player.from_home = Some(false);
        player.from_away = Some(false);
        return;
    };

    let (home, away) = split_matchup(&game.vs);
    game.home = home;
    game.away = away;

    player.from_home = Some(game.home.as_deref() == Some(abbr.as_str()));
    player.from_away = Some(game.away.as_deref() == Some(abbr.as_str()));
}

/// `"HOME vs AWAY"` -> (HOME, AWAY). Token 1 is the literal `vs`.
pub fn split_matchup(vs: &str) -> (Option<String>, Option<String>) {
    let teams: Vec<&str> = vs.split_whitespace().collect();
    (
        teams.first().map(|t| t.to_string()),
        teams.get(2).map(|t| t.to_string()),
    )
}

/// A player without a name keeps no display name.
fn truncate_name(player: &mut PlayerGame) {
    player.display_name = player
        .player
        .as_ref()
        .and_then(|info| info.name.as_deref())
        .map(shorten_name);
}

/// `"LeBron James"` -> `"L.James"`. Names without a leading ASCII word followed
/// by whitespace are returned unchanged.
pub fn shorten_name(name: &str) -> String {
    let Some(caps) = FIRST_NAME.captures(name) else {
        return name.to_string();
    };
    let (Some(prefix), Some(first)) = (caps.get(0), caps.get(1)) else {
        return name.to_string();
    };
    match first.as_str().chars().next() {
        Some(initial) => format!("{}.{}", initial, &name[prefix.end()..]),
        None => name.to_string(),
    }
}

fn normalize_projection(player: &mut PlayerGame) {
    player.fantasy_points_fan_duel_projection = player
        .fantasy_points_fan_duel_projection
        .map(round_points);
}

/// Round to two decimals, halves away from zero.
pub fn round_points(points: f64) -> f64 {
    (points * 100.0).round() / 100.0
}
