//! Scripted controllers for testing and examples
//!
//! Both follow a predetermined sequence. The player script is raw text, so it
//! can include invalid lines to exercise the re-prompt path.

use crate::game::controller::{OpponentController, PlayerController, RoundView};
use crate::game::moves::{GameMode, Move};
use std::collections::VecDeque;

/// A player that types a predetermined sequence of lines
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    inputs: VecDeque<String>,
    /// Lines rejected by the loop so far
    pub rejected: Vec<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPlayer {
            inputs: inputs.into_iter().map(Into::into).collect(),
            rejected: Vec::new(),
        }
    }
}

impl PlayerController for ScriptedPlayer {
    fn next_input(&mut self, _view: &RoundView) -> Option<String> {
        self.inputs.pop_front()
    }

    fn on_invalid_input(&mut self, _view: &RoundView, raw: &str) {
        self.rejected.push(raw.to_string());
    }
}

/// An opponent that plays a predetermined sequence of moves
///
/// Once the script is exhausted it defaults to the first move of the mode.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    current_step: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: Vec<Move>) -> Self {
        ScriptedOpponent {
            moves,
            current_step: 0,
        }
    }
}

impl OpponentController for ScriptedOpponent {
    fn choose_move(&mut self, mode: GameMode) -> Move {
        match self.moves.get(self.current_step) {
            Some(&mv) => {
                self.current_step += 1;
                mv
            }
            None => mode.moves()[0],
        }
    }
}
