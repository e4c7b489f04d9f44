//! Core utilities shared across the library and CLI
//!
//! - `cache`: cache directory location and file helpers

pub mod cache;

pub use cache::{cache_root, write_string};
