//! Scoring period types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for the server's scoring week number.
///
/// # Examples
///
/// ```rust
/// use pak_players::Week;
///
/// let week = Week::new(7);
/// assert_eq!(week.as_u16(), 7);
/// assert_eq!(week.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
