//! Runtime configuration

use crate::game::VerbosityLevel;
use crate::storage::MAX_PROFILES;
use crate::Result;
use std::path::{Path, PathBuf};

pub const PROFILES_FILE: &str = "profiles.jsonl";
pub const SCOREBOARD_FILE: &str = "highscores.txt";
pub const STATS_FILE: &str = "gamestats.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Directory holding all three data files
    pub data_dir: PathBuf,
    /// Fixed seed for the computer's moves; `None` seeds from the clock
    pub seed: Option<u64>,
    pub verbosity: VerbosityLevel,
    pub max_profiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            data_dir: PathBuf::from("."),
            seed: None,
            verbosity: VerbosityLevel::default(),
            max_profiles: MAX_PROFILES,
        }
    }
}

impl GameConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        GameConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.data_dir.join(PROFILES_FILE)
    }

    pub fn scoreboard_path(&self) -> PathBuf {
        self.data_dir.join(SCOREBOARD_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_follow_data_dir() {
        let config = GameConfig::new("/tmp/cham");
        assert_eq!(config.profiles_path(), PathBuf::from("/tmp/cham/profiles.jsonl"));
        assert_eq!(config.scoreboard_path(), PathBuf::from("/tmp/cham/highscores.txt"));
        assert_eq!(config.stats_path(), PathBuf::from("/tmp/cham/gamestats.txt"));
        assert_eq!(config.max_profiles, MAX_PROFILES);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig::new(dir.path().join("a/b")).with_seed(7);
        config.ensure_data_dir().unwrap();
        assert!(config.data_dir.is_dir());
        assert_eq!(config.seed, Some(7));
    }
}
