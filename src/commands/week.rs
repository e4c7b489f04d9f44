//! Week command implementation

use chrono::DateTime;
use serde::Serialize;

use crate::{
    players::StoredWeek,
    storage::{stored_week, SqliteStore, PLAYER_DATA_KEY},
    Result,
};

/// Stored week plus when the player list was last written
#[derive(Debug, Serialize)]
pub struct WeekReport {
    #[serde(flatten)]
    pub week: StoredWeek,
    /// Unix seconds
    pub players_cached_at: Option<i64>,
}

/// Print the week metadata stored by the last players fetch
pub fn handle_week(as_json: bool) -> Result<()> {
    let store = SqliteStore::new()?;
    let report = WeekReport {
        week: stored_week(&store)?,
        players_cached_at: store.updated_at(PLAYER_DATA_KEY)?,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", describe_week(&report.week));
        if let Some(line) = describe_cached_at(report.players_cached_at) {
            println!("{}", line);
        }
    }

    Ok(())
}

pub fn describe_cached_at(updated_at: Option<i64>) -> Option<String> {
    let at = DateTime::from_timestamp(updated_at?, 0)?;
    Some(format!("Players cached at {}", at.format("%Y-%m-%d %H:%M:%S UTC")))
}

pub fn describe_week(stored: &StoredWeek) -> String {
    match (stored.week, stored.start_day, stored.end_day) {
        (None, _, _) => "No week cached yet".to_string(),
        (Some(week), Some(start), Some(end)) => format!("Week {} ({} to {})", week, start, end),
        (Some(week), _, _) => format!("Week {} (dates unknown)", week),
    }
}
