//! Session loop
//!
//! Drives one session round by round: ask the player for a move until a legal
//! one arrives, ask the opponent for theirs, resolve, narrate.

use crate::game::controller::{OpponentController, PlayerController, RoundView};
use crate::game::logger::GameLogger;
use crate::game::moves::{canonicalize, RoundOutcome};
use crate::game::session::{GameSession, SessionOutcome};
use crate::{ChamError, Result};

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only the session outcome
    Minimal = 1,
    /// Normal - every round (default)
    #[default]
    Normal = 2,
    /// Verbose - rejected input as well
    Verbose = 3,
}

impl std::str::FromStr for VerbosityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityLevel::Silent),
            "minimal" | "1" => Ok(VerbosityLevel::Minimal),
            "normal" | "2" => Ok(VerbosityLevel::Normal),
            "verbose" | "3" => Ok(VerbosityLevel::Verbose),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

/// Runs a session to completion against a pair of controllers
pub struct GameLoop<'a> {
    session: &'a mut GameSession,
    logger: &'a GameLogger,
}

impl<'a> GameLoop<'a> {
    pub fn new(session: &'a mut GameSession, logger: &'a GameLogger) -> Self {
        GameLoop { session, logger }
    }

    /// Play every remaining round
    ///
    /// Invalid input never fails a round; the player is asked again as often
    /// as needed. Returns `InputClosed` if the player's input runs out first,
    /// leaving the session incomplete.
    pub fn run_session(
        &mut self,
        player: &mut dyn PlayerController,
        opponent: &mut dyn OpponentController,
    ) -> Result<SessionOutcome> {
        let mode = self.session.mode();

        while !self.session.is_complete() {
            let round = self.session.rounds_played() + 1;
            self.logger.normal(&format!("Round {round}"));

            let player_move = loop {
                let view = RoundView {
                    player_name: self.session.player_name(),
                    mode,
                    round,
                    total_rounds: self.session.rounds(),
                    wins: self.session.wins(),
                    losses: self.session.losses(),
                };
                let raw = player.next_input(&view).ok_or(ChamError::InputClosed)?;
                match canonicalize(&raw, mode)
                    .ok_or_else(|| ChamError::InvalidMove(raw.trim().to_string()))
                {
                    Ok(mv) => break mv,
                    Err(e) => {
                        self.logger.verbose(&format!("Rejected input: {e}"));
                        player.on_invalid_input(&view, &raw);
                    }
                }
            };

            let computer_move = opponent.choose_move(mode);
            self.logger
                .normal(&format!("Computer chose: {}", computer_move.code()));

            let outcome = self.session.record_round(player_move, computer_move);
            let message = match outcome {
                RoundOutcome::Win => "You WIN this round!",
                RoundOutcome::Loss => "You LOSE this round!",
            };
            self.logger
                .event(VerbosityLevel::Normal, "round_result", message);

            if let Some(record) = self.session.history().last() {
                player.on_round_resolved(record);
            }
        }

        self.log_summary();
        Ok(self.session.outcome())
    }

    fn log_summary(&self) {
        let s = &*self.session;
        self.logger.minimal(&format!(
            "Game over! {}'s Results:\nRounds Played: {}\nWins: {}\nLosses: {}",
            s.player_name(),
            s.rounds_played(),
            s.wins(),
            s.losses()
        ));
        self.logger
            .event(VerbosityLevel::Minimal, "session_summary", s.outcome().message());
    }
}
