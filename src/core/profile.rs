//! Player profile representation

use crate::core::PlayerName;
use crate::game::GameSession;
use serde::{Deserialize, Serialize};

/// Lifetime record of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique (case-sensitive) player name
    pub name: PlayerName,

    /// Rounds played across all sessions
    pub games_played: u64,

    /// Rounds won across all sessions
    pub wins: u64,

    /// Rounds lost across all sessions
    pub losses: u64,
}

impl Profile {
    pub fn new(name: PlayerName) -> Self {
        Profile {
            name,
            games_played: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Fold a finished session into the lifetime counters
    pub fn apply_session_result(&mut self, session: &GameSession) {
        self.games_played += u64::from(session.rounds_played());
        self.wins += u64::from(session.wins());
        self.losses += u64::from(session.losses());
    }
}
