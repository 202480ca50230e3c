//! Controller interfaces for both sides of a session
//!
//! The game loop never reads stdin or touches an RNG itself. The human side
//! is a [`PlayerController`] that hands back raw input lines, and the
//! computer side is an [`OpponentController`] that picks a canonical move.
//! Swapping implementations is how tests script whole sessions.

use crate::core::PlayerName;
use crate::game::moves::{GameMode, Move};
use crate::game::session::RoundRecord;

/// Read-only view of the round being played
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub player_name: &'a PlayerName,
    pub mode: GameMode,
    /// 1-based round number
    pub round: u32,
    pub total_rounds: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Source of the player's raw moves
pub trait PlayerController {
    /// Next raw input line for this round
    ///
    /// Returns `None` when the input source is exhausted; the loop then
    /// aborts the session.
    fn next_input(&mut self, view: &RoundView) -> Option<String>;

    /// Called when the last input was not a legal move; the loop asks again
    fn on_invalid_input(&mut self, _view: &RoundView, _raw: &str) {}

    /// Called after a round has been resolved
    fn on_round_resolved(&mut self, _record: &RoundRecord) {}
}

/// Chooses the computer's move
pub trait OpponentController {
    /// Pick one of `mode.moves()`
    fn choose_move(&mut self, mode: GameMode) -> Move;
}
