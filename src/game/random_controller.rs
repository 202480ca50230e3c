//! Random computer opponent
//!
//! Draws uniformly from the mode's four moves. The generator is injected, so
//! tests can replay exact sequences.

use crate::game::controller::OpponentController;
use crate::game::moves::{GameMode, Move};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// An opponent that makes random choices
pub struct RandomOpponent {
    rng: Box<dyn rand::RngCore>,
}

impl RandomOpponent {
    /// Create a random opponent seeded once from the system clock
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a random opponent with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        RandomOpponent {
            rng: Box::new(ChaCha12Rng::seed_from_u64(seed)),
        }
    }

    /// Use any randomness source
    pub fn from_rng(rng: Box<dyn rand::RngCore>) -> Self {
        RandomOpponent { rng }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentController for RandomOpponent {
    fn choose_move(&mut self, mode: GameMode) -> Move {
        let moves = mode.moves();
        moves[self.rng.gen_range(0..moves.len())]
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
