//! Current-week player pool: wire types, display normalization and the
//! caching accessor.

pub mod service;
pub mod transform;
pub mod types;

pub use service::{CacheStatus, PlayerService};
pub use transform::{transform, transform_all};
pub use types::{GameInfo, PlayerGame, PlayerInfo, StoredWeek, TeamInfo, WeekDescriptor};
