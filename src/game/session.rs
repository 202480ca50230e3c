//! In-memory record of one play session

use crate::core::PlayerName;
use crate::game::moves::{resolve_round, GameMode, Move, RoundOutcome};
use crate::{ChamError, Result};
use smallvec::SmallVec;

/// Most rounds a single session may run
pub const MAX_ROUNDS: u32 = 20;

/// One resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
}

/// Session-level result, comparing total wins and losses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Win,
    Loss,
    Draw,
}

impl SessionOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SessionOutcome::Win => "You won the game! Congratulations!",
            SessionOutcome::Loss => "You lost the game. Better luck next time!",
            SessionOutcome::Draw => "The game was a draw!",
        }
    }
}

/// A session in progress or just finished
///
/// Never persisted as-is: once complete, its totals are folded into the
/// profile store and its summary lands in the score ledger and stats log.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_name: PlayerName,
    mode: GameMode,
    rounds: u32,
    wins: u32,
    losses: u32,
    history: SmallVec<[RoundRecord; MAX_ROUNDS as usize]>,
}

impl GameSession {
    /// Start an empty session of `rounds` rounds (1 to [`MAX_ROUNDS`])
    pub fn new(player_name: PlayerName, mode: GameMode, rounds: u32) -> Result<Self> {
        if !(1..=MAX_ROUNDS).contains(&rounds) {
            return Err(ChamError::InvalidRounds(rounds));
        }
        Ok(GameSession {
            player_name,
            mode,
            rounds,
            wins: 0,
            losses: 0,
            history: SmallVec::new(),
        })
    }

    /// Resolve and store the next round
    ///
    /// Rounds past the planned count are ignored.
    pub fn record_round(&mut self, player_move: Move, computer_move: Move) -> RoundOutcome {
        let outcome = resolve_round(player_move, computer_move);
        if self.is_complete() {
            return outcome;
        }
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
        }
        self.history.push(RoundRecord {
            round: self.history.len() as u32 + 1,
            player_move,
            computer_move,
            outcome,
        });
        outcome
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Planned number of rounds
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Rounds resolved so far
    pub fn rounds_played(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_played() >= self.rounds
    }

    pub fn outcome(&self) -> SessionOutcome {
        use std::cmp::Ordering;
        match self.wins.cmp(&self.losses) {
            Ordering::Greater => SessionOutcome::Win,
            Ordering::Less => SessionOutcome::Loss,
            Ordering::Equal => SessionOutcome::Draw,
        }
    }
}
