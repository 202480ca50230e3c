//! Strongly-typed wrappers for game concepts
//!
//! Player names travel through the profile store, the score ledger and the
//! stats log; the trimming and length rules live here.

use crate::{ChamError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 49;

/// Player name (distinct from other string types)
///
/// A validated name is never empty, carries no leading or trailing
/// whitespace and is at most [`MAX_NAME_LEN`] characters. Comparison is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim and validate raw user input
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChamError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ChamError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }
        Ok(PlayerName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-check a name that bypassed [`PlayerName::parse`] (e.g. deserialized)
    pub fn is_valid(&self) -> bool {
        PlayerName::parse(&self.0).is_ok_and(|parsed| parsed == *self)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PlayerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
