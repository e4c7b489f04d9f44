//! Wire types for the current-week and player-game endpoints.
//!
//! Player records are augmented in place by [`transform`](super::transform::transform),
//! so the same struct describes both the raw API shape and the display shape.
//! Fields this crate does not interpret are carried in `extra` and written back
//! out unchanged, which keeps cached records faithful to what the API returned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::types::Week;

/// Response of `current_week/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeekDescriptor {
    pub week: Week,
    pub start_day: NaiveDate,
    pub end_day: NaiveDate,
}

/// Response of `playergames/`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerGamesPage {
    #[serde(default)]
    pub results: Vec<PlayerGame>,
}

/// One entry of the weekly player pool.
///
/// Bye or placeholder entries come through without a nested `player`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PlayerGame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameInfo>,

    #[serde(
        rename = "FanDuelSalary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fan_duel_salary: Option<f64>,

    #[serde(
        rename = "FantasyPointsFanDuelProjection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fantasy_points_fan_duel_projection: Option<f64>,

    /// First initial plus last name, e.g. `L.James`
    #[serde(
        rename = "displayName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,

    /// Player's team is the home side of `game.vs`
    #[serde(rename = "fromHome", default, skip_serializing_if = "Option::is_none")]
    pub from_home: Option<bool>,

    /// Player's team is the away side of `game.vs`
    #[serde(rename = "fromAway", default, skip_serializing_if = "Option::is_none")]
    pub from_away: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PlayerInfo {
    /// Full name; the API sometimes sends null or omits it
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub team: TeamInfo,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub abbr: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Matchup for the week, `vs` reads `"HOME vs AWAY"`
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GameInfo {
    #[serde(default)]
    pub vs: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Week metadata as last persisted by the store. Any part may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StoredWeek {
    pub week: Option<Week>,
    pub start_day: Option<NaiveDate>,
    pub end_day: Option<NaiveDate>,
}

impl PlayerGame {
    /// Name shown in listings, falling back to the raw name before transform.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or_else(|| self.player.as_ref().and_then(|p| p.name.as_deref()))
            .unwrap_or("-")
    }
}
