//! Client-side persistence for the current week and its player pool
//!
//! - `memory`: process-local store
//! - `schema`: SQLite connection and schema management
//! - `queries`: key-value reads and writes backing [`PlayerStore`] for SQLite

pub mod memory;
pub mod queries;
pub mod schema;


use chrono::NaiveDate;

use crate::{
    cli::types::Week,
    players::types::{PlayerGame, StoredWeek},
    Result,
};

pub use memory::MemoryStore;
pub use schema::SqliteStore;

/// Storage keys, shared by every backend that persists by name.
pub const CURRENT_WEEK_KEY: &str = "currentWeek";
pub const START_DAY_KEY: &str = "startDay";
pub const END_DAY_KEY: &str = "endDay";
pub const PLAYER_DATA_KEY: &str = "playerData";

/// Last-write-wins key-value store for week metadata and the cached player list.
///
/// Each setter is independent; nothing groups the three week writes into a
/// single transaction.
pub trait PlayerStore {
    fn current_week(&self) -> Result<Option<Week>>;
    fn set_current_week(&mut self, week: Week) -> Result<()>;

    fn start_day(&self) -> Result<Option<NaiveDate>>;
    fn set_start_day(&mut self, day: NaiveDate) -> Result<()>;

    fn end_day(&self) -> Result<Option<NaiveDate>>;
    fn set_end_day(&mut self, day: NaiveDate) -> Result<()>;

    fn player_data(&self) -> Result<Option<Vec<PlayerGame>>>;
    fn set_player_data(&mut self, players: &[PlayerGame]) -> Result<()>;

    /// Drop week metadata and cached players.
    fn clear(&mut self) -> Result<()>;
}

/// Read the persisted week metadata in one go.
pub fn stored_week<S: PlayerStore + ?Sized>(store: &S) -> Result<StoredWeek> {
    Ok(StoredWeek {
        week: store.current_week()?,
        start_day: store.start_day()?,
        end_day: store.end_day()?,
    })
}

impl<S: PlayerStore + ?Sized> PlayerStore for Box<S> {
    fn current_week(&self) -> Result<Option<Week>> {
        (**self).current_week()
    }

    fn set_current_week(&mut self, week: Week) -> Result<()> {
        (**self).set_current_week(week)
    }

    fn start_day(&self) -> Result<Option<NaiveDate>> {
        (**self).start_day()
    }

    fn set_start_day(&mut self, day: NaiveDate) -> Result<()> {
        (**self).set_start_day(day)
    }

    fn end_day(&self) -> Result<Option<NaiveDate>> {
        (**self).end_day()
    }

    fn set_end_day(&mut self, day: NaiveDate) -> Result<()> {
        (**self).set_end_day(day)
    }

    fn player_data(&self) -> Result<Option<Vec<PlayerGame>>> {
        (**self).player_data()
    }

    fn set_player_data(&mut self, players: &[PlayerGame]) -> Result<()> {
        (**self).set_player_data(players)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
