//! Current-week player accessor.

use tracing::{debug, info};

use super::{
    transform::transform_all,
    types::{PlayerGame, PlayerGamesPage, StoredWeek, WeekDescriptor},
};
use crate::{
    api::{ApiClient, CURRENT_WEEK_PATH, PLAYER_GAMES_PATH},
    storage::{stored_week, PlayerStore},
    Result,
};


/// Where the players returned by [`PlayerService::get_players`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Stored week matched the server and a cached list existed
    Hit,
    /// Week changed or nothing cached, list was fetched and stored
    Miss,
}

/// Serves the current week's player pool, caching it in a [`PlayerStore`].
///
/// The cache holds one week at a time. When the server reports a different week
/// than the store, the week metadata is overwritten and the player list is
/// refetched and replaced as a whole.
pub struct PlayerService<A, S> {
    api: A,
    store: S,
    latest: Option<Vec<PlayerGame>>,
}

impl<A, S> PlayerService<A, S>
where
    A: ApiClient,
    S: PlayerStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            latest: None,
        }
    }

    /// Players for the current week, highest salary first.
    pub async fn get_players(&mut self) -> Result<Vec<PlayerGame>> {
        self.get_players_with_status().await.map(|(players, _)| players)
    }

    /// Same as [`get_players`](Self::get_players), also reporting whether the
    /// cache was used.
    pub async fn get_players_with_status(&mut self) -> Result<(Vec<PlayerGame>, CacheStatus)> {
        let week: WeekDescriptor = serde_json::from_value(self.api.get(CURRENT_WEEK_PATH).await?)?;
        debug!(week = %week.week, start = %week.start_day, end = %week.end_day, "current week");

        let cached_week = self.store.current_week()?;
        if cached_week == Some(week.week) {
            if let Some(cached) = self.store.player_data()? {
                info!(week = %week.week, players = cached.len(), "using cached players");
                self.latest = Some(cached.clone());
                return Ok((cached, CacheStatus::Hit));
            }
        }

        info!(
            week = %week.week,
            stored = ?cached_week.map(|w| w.as_u16()),
            "fetching players"
        );
        self.store.set_current_week(week.week)?;
        self.store.set_start_day(week.start_day)?;
        self.store.set_end_day(week.end_day)?;

        let page: PlayerGamesPage =
            serde_json::from_value(self.api.get(PLAYER_GAMES_PATH).await?)?;
        let players = transform_all(page.results);

        self.store.set_player_data(&players)?;
        info!(week = %week.week, players = players.len(), "cached players");

        self.latest = Some(players.clone());
        Ok((players, CacheStatus::Miss))
    }

    /// Week metadata as currently persisted, without contacting the API.
    pub fn stored_week(&self) -> Result<StoredWeek> {
        stored_week(&self.store)
    }

    /// Result of the most recent successful [`get_players`](Self::get_players)
    /// on this instance.
    pub fn latest(&self) -> Option<&[PlayerGame]> {
        self.latest.as_deref()
    }

    /// Forget cached week metadata and players, here and in the store.
    pub fn clear_cache(&mut self) -> Result<()> {
        self.latest = None;
        self.store.clear()
    }

    /// Read access to the backing store, e.g. to inspect what was cached.
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (A, S) {
        (self.api, self.store)
    }
}
