//! Ties the session loop to the three stores
//!
//! [`Arcade::play_session`] runs a session for one profile and then flushes
//! the result: lifetime stats always, the ledger only on a net win, and the
//! stats log always. Failures while flushing are reported back as warnings.

use crate::config::GameConfig;
use crate::game::{
    GameLogger, GameLoop, GameMode, GameSession, OpponentController, PlayerController,
    RandomOpponent, SessionOutcome,
};
use crate::storage::{Persistence, ProfileStore, ScoreLedger, StatsLog};
use crate::{ChamError, Result};
use tracing::{info, warn};

/// What happened when a session was played and flushed
#[derive(Debug)]
pub struct SessionReport {
    pub session: GameSession,
    pub outcome: SessionOutcome,
    /// Whether a line was appended to the score ledger
    pub score_recorded: bool,
    /// Non-fatal persistence failures
    pub warnings: Vec<ChamError>,
}

#[derive(Debug)]
pub struct Arcade {
    config: GameConfig,
    profiles: ProfileStore,
    ledger: ScoreLedger,
    stats: StatsLog,
    logger: GameLogger,
}

impl Arcade {
    /// Open the stores under the configured data directory
    pub fn open(config: GameConfig) -> Result<Self> {
        config.ensure_data_dir()?;
        let profiles = ProfileStore::with_capacity(config.profiles_path(), config.max_profiles);
        let ledger = ScoreLedger::new(config.scoreboard_path());
        let stats = StatsLog::new(config.stats_path());
        let logger = GameLogger::with_verbosity(config.verbosity);
        info!(
            "opened arcade in {} with {} profiles",
            config.data_dir.display(),
            profiles.len()
        );
        Ok(Arcade {
            config,
            profiles,
            ledger,
            stats,
            logger,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn profiles_mut(&mut self) -> &mut ProfileStore {
        &mut self.profiles
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &StatsLog {
        &self.stats
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// The default computer opponent, seeded from config when a seed is set
    pub fn opponent(&self) -> RandomOpponent {
        match self.config.seed {
            Some(seed) => RandomOpponent::with_seed(seed),
            None => RandomOpponent::new(),
        }
    }

    /// Play `rounds` rounds for the profile at `profile_index` and flush
    ///
    /// An aborted session (input closed) is returned as an error and leaves
    /// every store untouched.
    pub fn play_session(
        &mut self,
        profile_index: usize,
        mode: GameMode,
        rounds: u32,
        player: &mut dyn PlayerController,
        opponent: &mut dyn OpponentController,
    ) -> Result<SessionReport> {
        let name = self
            .profiles
            .get(profile_index)
            .map(|p| p.name.clone())
            .ok_or(ChamError::InvalidIndex {
                index: profile_index,
                len: self.profiles.len(),
            })?;
        let mut session = GameSession::new(name, mode, rounds)?;

        let outcome = GameLoop::new(&mut session, &self.logger).run_session(player, opponent)?;
        info!(
            "{} finished a {} session: {} won, {} lost",
            session.player_name(),
            mode.label(),
            session.wins(),
            session.losses()
        );

        let mut warnings = Vec::new();
        if let Persistence::Unsaved(e) =
            self.profiles.apply_session_result(profile_index, &session)?
        {
            warnings.push(e);
        }

        let mut score_recorded = false;
        if outcome == SessionOutcome::Win {
            match self.ledger.record_win(&session) {
                Ok(()) => score_recorded = true,
                Err(e) => {
                    warn!("could not update scoreboard: {}", e);
                    warnings.push(e);
                }
            }
        }

        if let Err(e) = self.stats.record(&session) {
            warn!("could not update game stats: {}", e);
            warnings.push(e);
        }

        Ok(SessionReport {
            session,
            outcome,
            score_recorded,
            warnings,
        })
    }
}
