//! Key-value operations behind the SQLite store

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::{
    schema::SqliteStore, PlayerStore, CURRENT_WEEK_KEY, END_DAY_KEY, PLAYER_DATA_KEY,
    START_DAY_KEY,
};
use crate::{cli::types::Week, players::types::PlayerGame, PakError, Result};

impl SqliteStore {
    /// Read and decode a JSON value stored under `key`.
    pub fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM player_cache WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|s| serde_json::from_str(&s).map_err(PakError::from))
            .transpose()
    }

    /// Encode `value` as JSON and store it under `key`, replacing any previous value.
    pub fn set_value<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        self.conn.execute(
            "INSERT OR REPLACE INTO player_cache (key, value, updated_at) VALUES (?, ?, ?)",
            params![key, json, now as i64],
        )?;
        Ok(())
    }

    /// Unix seconds of the last write to `key`
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>> {
        Ok(self
            .conn
            .query_row(
                "SELECT updated_at FROM player_cache WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }
}

impl PlayerStore for SqliteStore {
    fn current_week(&self) -> Result<Option<Week>> {
        self.get_value(CURRENT_WEEK_KEY)
    }

    fn set_current_week(&mut self, week: Week) -> Result<()> {
        self.set_value(CURRENT_WEEK_KEY, &week)
    }

    fn start_day(&self) -> Result<Option<NaiveDate>> {
        self.get_value(START_DAY_KEY)
    }

    fn set_start_day(&mut self, day: NaiveDate) -> Result<()> {
        self.set_value(START_DAY_KEY, &day)
    }

    fn end_day(&self) -> Result<Option<NaiveDate>> {
        self.get_value(END_DAY_KEY)
    }

    fn set_end_day(&mut self, day: NaiveDate) -> Result<()> {
        self.set_value(END_DAY_KEY, &day)
    }

    fn player_data(&self) -> Result<Option<Vec<PlayerGame>>> {
        self.get_value(PLAYER_DATA_KEY)
    }

    fn set_player_data(&mut self, players: &[PlayerGame]) -> Result<()> {
        self.set_value(PLAYER_DATA_KEY, players)
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM player_cache", [])?;
        Ok(())
    }
}
