//! Append-only history of every completed session

use crate::game::GameSession;
use crate::Result;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const BLOCK_TERMINATOR: &str = "-----";

#[derive(Debug, Clone)]
pub struct StatsLog {
    path: PathBuf,
}

impl StatsLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        StatsLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the session's block, stamped with the current local time
    pub fn record(&self, session: &GameSession) -> Result<()> {
        self.record_at(session, &Local::now())
    }

    pub fn record_at(&self, session: &GameSession, at: &DateTime<Local>) -> Result<()> {
        let block = format_block(session, at);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        debug!("appended session for {} to {}", session.player_name(), self.path.display());
        Ok(())
    }

    /// The whole log verbatim, or `None` if nothing was ever recorded
    pub fn render_history(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Render one session block, ending with the terminator line
pub fn format_block(session: &GameSession, at: &DateTime<Local>) -> String {
    let mut block = format!(
        "Player: {}\nMode: {}\nRounds: {}\nWins: {}\nLosses: {}\nPlayed: {}\n",
        session.player_name(),
        session.mode().label(),
        session.rounds_played(),
        session.wins(),
        session.losses(),
        at.format("%Y-%m-%d %H:%M:%S"),
    );
    for record in session.history() {
        block.push_str(&format!(
            "Round {}: {} vs {} ({})\n",
            record.round,
            record.player_move.code(),
            record.computer_move.code(),
            record.outcome.label()
        ));
    }
    block.push_str(BLOCK_TERMINATOR);
    block.push('\n');
    block
}
