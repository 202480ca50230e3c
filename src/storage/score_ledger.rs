//! Append-only log of winning sessions and the scoreboard built from it
//!
//! Each line is `<name> <rounds> <wins> <losses>`. Names may contain spaces,
//! so the last three fields are always the counters.

use crate::game::{GameSession, SessionOutcome};
use crate::{ChamError, Result};
use rustc_hash::FxHashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Aggregated totals for one player, derived from the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub games_played: u64,
    pub wins: u64,
    pub losses: u64,
}

#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
}

impl ScoreLedger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ScoreLedger {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a line for a session the player won
    pub fn record_win(&self, session: &GameSession) -> Result<()> {
        if session.outcome() != SessionOutcome::Win {
            return Err(ChamError::InvalidAction(format!(
                "only winning sessions go on the scoreboard ({} won {}, lost {})",
                session.player_name(),
                session.wins(),
                session.losses()
            )));
        }

        let line = format!(
            "{} {} {} {}",
            session.player_name(),
            session.rounds_played(),
            session.wins(),
            session.losses()
        );
        self.append_line(&line)?;
        debug!("recorded win for {} in {}", session.player_name(), self.path.display());
        Ok(())
    }

    /// Every player in the ledger, aggregated and ranked
    ///
    /// An unreadable ledger yields no entries.
    pub fn render_scoreboard(&self) -> Vec<ScoreEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("could not read scoreboard {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        let mut entries = aggregate(content.lines());
        rank(&mut entries);
        entries
    }

    fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// Parse one ledger line into `(name, games, wins, losses)`
///
/// The name is everything before the last three space-separated fields,
/// kept exactly as written.
pub fn parse_line(line: &str) -> Option<ScoreEntry> {
    let mut fields = line.trim_end().rsplitn(4, ' ');
    let losses = fields.next()?.parse().ok()?;
    let wins = fields.next()?.parse().ok()?;
    let games_played = fields.next()?.parse().ok()?;
    let name = fields.next()?;
    if name.trim().is_empty() {
        return None;
    }
    Some(ScoreEntry {
        name: name.to_string(),
        games_played,
        wins,
        losses,
    })
}

/// Sum all lines per name, keeping first-seen order
///
/// Malformed lines, and lines that would overflow a running total, are skipped.
pub fn aggregate<'a, I>(lines: I) -> Vec<ScoreEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut entries: Vec<ScoreEntry> = Vec::new();

    for parsed in lines.into_iter().filter_map(parse_line) {
        match slots.get(&parsed.name) {
            Some(&slot) => {
                let entry = &mut entries[slot];
                match (
                    entry.games_played.checked_add(parsed.games_played),
                    entry.wins.checked_add(parsed.wins),
                    entry.losses.checked_add(parsed.losses),
                ) {
                    (Some(games_played), Some(wins), Some(losses)) => {
                        entry.games_played = games_played;
                        entry.wins = wins;
                        entry.losses = losses;
                    }
                    _ => debug!("skipping ledger line for {}: totals would overflow", parsed.name),
                }
            }
            None => {
                slots.insert(parsed.name.clone(), entries.len());
                entries.push(parsed);
            }
        }
    }
    entries
}

/// Wins descending, then name ascending
pub fn rank(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
}

pub fn format_scoreboard(entries: &[ScoreEntry]) -> String {
    let mut out = format!(
        "{:<20} | {:<12} | {:<6} | {:<6}\n",
        "Player Name", "Games Played", "Wins", "Losses"
    );
    out.push_str(&"-".repeat(53));
    for entry in entries {
        out.push('\n');
        out.push_str(&format!(
            "{:<20} | {:<12} | {:<6} | {:<6}",
            entry.name, entry.games_played, entry.wins, entry.losses
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerName;
    use crate::game::{GameMode, Move};
    use tempfile::TempDir;

    fn entry(name: &str, games: u64, wins: u64, losses: u64) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            games_played: games,
            wins,
            losses,
        }
    }

    /// Build a finished basic session with the given number of wins and losses
    fn session(name: &str, wins: u32, losses: u32) -> GameSession {
        let mut s = GameSession::new(
            PlayerName::parse(name).unwrap(),
            GameMode::Basic,
            wins + losses,
        )
        .unwrap();
        for _ in 0..wins {
            s.record_round(Move::Left, Move::Right);
        }
        for _ in 0..losses {
            s.record_round(Move::Up, Move::Up);
        }
        s
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("Alice 5 3 2"), Some(entry("Alice", 5, 3, 2)));
        assert_eq!(parse_line("Mary Jane 4 3 1"), Some(entry("Mary Jane", 4, 3, 1)));
        assert_eq!(parse_line("Alice 5 3"), None);
        assert_eq!(parse_line("Alice five 3 2"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_aggregate_sums_per_name() {
        let entries = aggregate(["Alice 5 3 2", "garbage", "Alice 5 2 3"]);
        assert_eq!(entries, vec![entry("Alice", 10, 5, 5)]);
    }

    #[test]
    fn test_names_keep_inner_whitespace() {
        assert_eq!(parse_line("Mary  Jane 2 2 0"), Some(entry("Mary  Jane", 2, 2, 0)));

        let dir = TempDir::new().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("highscores.txt"));
        ledger.record_win(&session("Mary Jane", 1, 0)).unwrap();
        ledger.record_win(&session("Mary  Jane", 1, 0)).unwrap();

        let board = ledger.render_scoreboard();
        assert_eq!(
            board,
            vec![entry("Mary  Jane", 1, 1, 0), entry("Mary Jane", 1, 1, 0)]
        );
    }

    #[test]
    fn test_aggregate_skips_overflowing_lines() {
        let entries = aggregate(["Alice 18446744073709551615 1 0", "Alice 5 3 2", "Bob 1 1 0"]);
        assert_eq!(
            entries,
            vec![entry("Alice", u64::MAX, 1, 0), entry("Bob", 1, 1, 0)]
        );
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut forward = aggregate(["Alice 5 3 2", "Bob 5 4 1", "Alice 3 2 1"]);
        let mut backward = aggregate(["Alice 3 2 1", "Bob 5 4 1", "Alice 5 3 2"]);
        rank(&mut forward);
        rank(&mut backward);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_rank_orders_by_wins_then_name() {
        let mut entries = aggregate(["Alice 5 3 2", "Alice 5 2 3", "Bob 5 4 1"]);
        rank(&mut entries);
        assert_eq!(entries[0].name, "Alice");
        assert_eq!(entries[1].name, "Bob");

        let mut tied = vec![entry("Zed", 3, 2, 1), entry("Amy", 3, 2, 1)];
        rank(&mut tied);
        assert_eq!(tied[0].name, "Amy");
    }

    #[test]
    fn test_record_win_appends_one_line() {
        let dir = TempDir::new().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("highscores.txt"));

        ledger.record_win(&session("Alice", 3, 2)).unwrap();
        let content = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content, "Alice 5 3 2\n");

        ledger.record_win(&session("Bob", 1, 0)).unwrap();
        let content = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content, "Alice 5 3 2\nBob 1 1 0\n");
    }

    #[test]
    fn test_record_win_refuses_draw_and_loss() {
        let dir = TempDir::new().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("highscores.txt"));

        assert!(matches!(
            ledger.record_win(&session("Alice", 2, 2)),
            Err(ChamError::InvalidAction(_))
        ));
        assert!(matches!(
            ledger.record_win(&session("Alice", 1, 3)),
            Err(ChamError::InvalidAction(_))
        ));
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_render_scoreboard_missing_file() {
        let dir = TempDir::new().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("highscores.txt"));
        assert!(ledger.render_scoreboard().is_empty());
    }

    #[test]
    fn test_render_scoreboard_reads_and_ranks() {
        let dir = TempDir::new().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("highscores.txt"));
        fs::write(ledger.path(), "Alice 5 3 2\nnot a line\nBob 5 4 1\nAlice 5 2 3\n").unwrap();

        let board = ledger.render_scoreboard();
        assert_eq!(board, vec![entry("Alice", 10, 5, 5), entry("Bob", 5, 4, 1)]);
    }

    #[test]
    fn test_format_scoreboard() {
        let text = format_scoreboard(&[entry("Alice", 10, 5, 5)]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0].trim_end(),
            "Player Name          | Games Played | Wins   | Losses"
        );
        assert!(lines[2].starts_with("Alice                | 10           | 5      | 5"));
    }
}
