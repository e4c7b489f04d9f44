//! Remote API access.
//!
//! The player service only needs a single verb, so the seam is the
//! [`ApiClient`] trait; [`HttpApiClient`] is the reqwest-backed implementation.

pub mod http;

pub use http::{ApiClient, HttpApiClient, CURRENT_WEEK_PATH, PLAYER_GAMES_PATH};
