//! Strongly typed values shared by the CLI and the library.

pub mod time;

pub use time::Week;
