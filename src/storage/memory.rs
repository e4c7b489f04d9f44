//! In-process store, lost when the process exits.

use chrono::NaiveDate;

use super::PlayerStore;
use crate::{cli::types::Week, players::types::PlayerGame, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    current_week: Option<Week>,
    start_day: Option<NaiveDate>,
    end_day: Option<NaiveDate>,
    player_data: Option<Vec<PlayerGame>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for MemoryStore {
    fn current_week(&self) -> Result<Option<Week>> {
        Ok(self.current_week)
    }

    fn set_current_week(&mut self, week: Week) -> Result<()> {
        self.current_week = Some(week);
        Ok(())
    }

    fn start_day(&self) -> Result<Option<NaiveDate>> {
        Ok(self.start_day)
    }

    fn set_start_day(&mut self, day: NaiveDate) -> Result<()> {
        self.start_day = Some(day);
        Ok(())
    }

    fn end_day(&self) -> Result<Option<NaiveDate>> {
        Ok(self.end_day)
    }

    fn set_end_day(&mut self, day: NaiveDate) -> Result<()> {
        self.end_day = Some(day);
        Ok(())
    }

    fn player_data(&self) -> Result<Option<Vec<PlayerGame>>> {
        Ok(self.player_data.clone())
    }

    fn set_player_data(&mut self, players: &[PlayerGame]) -> Result<()> {
        self.player_data = Some(players.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self = Self::default();
        Ok(())
    }
}
