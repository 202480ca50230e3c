//! Move alphabets, canonicalization and round resolution
//!
//! Two modes share one rule: the player loses a round when their canonical
//! move equals the computer's, and wins otherwise. There is no round-level
//! draw.
//!
//! ## Basic mode
//!
//! Single-letter directions `L`, `R`, `U`, `D` (any case).
//!
//! ## Advanced mode
//!
//! Diagonals `LU`, `LD`, `RU`, `RD`, typed directly (any case) or through the
//! shortcuts `A`→`LU`, `B`→`LD`, `C`→`RU`, `E`→`RD`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game mode, selecting the legal move alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    Basic,
    Advanced,
}

impl GameMode {
    /// The four canonical moves of this mode, in draw order
    pub fn moves(self) -> &'static [Move; 4] {
        match self {
            GameMode::Basic => &BASIC_MOVES,
            GameMode::Advanced => &ADVANCED_MOVES,
        }
    }

    /// Label written to the stats log
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Basic => "Basic",
            GameMode::Advanced => "Advanced",
        }
    }

    /// Per-round input prompt
    pub fn prompt(self) -> &'static str {
        match self {
            GameMode::Basic => "Enter your move (L,R,U,D): ",
            GameMode::Advanced => {
                "Enter your move (A=LU, B=LD, C=RU, E=RD or full LU/LD/RU/RD): "
            }
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A canonical move
///
/// `Copy` and owned, so every call to [`canonicalize`] hands back an
/// independent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

const BASIC_MOVES: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];
const ADVANCED_MOVES: [Move; 4] = [
    Move::LeftUp,
    Move::LeftDown,
    Move::RightUp,
    Move::RightDown,
];

impl Move {
    /// Canonical upper-case code
    pub fn code(self) -> &'static str {
        match self {
            Move::Left => "L",
            Move::Right => "R",
            Move::Up => "U",
            Move::Down => "D",
            Move::LeftUp => "LU",
            Move::LeftDown => "LD",
            Move::RightUp => "RU",
            Move::RightDown => "RD",
        }
    }

    /// Mode whose alphabet contains this move
    pub fn mode(self) -> GameMode {
        match self {
            Move::Left | Move::Right | Move::Up | Move::Down => GameMode::Basic,
            _ => GameMode::Advanced,
        }
    }

    fn from_code(code: &str) -> Option<Move> {
        BASIC_MOVES
            .iter()
            .chain(ADVANCED_MOVES.iter())
            .copied()
            .find(|mv| mv.code().eq_ignore_ascii_case(code))
    }

    fn from_shortcut(input: &str) -> Option<Move> {
        match input {
            "A" | "a" => Some(Move::LeftUp),
            "B" | "b" => Some(Move::LeftDown),
            "C" | "c" => Some(Move::RightUp),
            "E" | "e" => Some(Move::RightDown),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a single round, from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
}

impl RoundOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RoundOutcome::Win => "WIN",
            RoundOutcome::Loss => "LOSS",
        }
    }
}

/// Map raw input to its canonical move, if it is legal in `mode`
///
/// Surrounding whitespace is ignored. Moves from the other mode's alphabet
/// are rejected.
pub fn canonicalize(raw: &str, mode: GameMode) -> Option<Move> {
    let input = raw.trim();
    let mv = match mode {
        GameMode::Basic => Move::from_code(input),
        GameMode::Advanced => Move::from_shortcut(input).or_else(|| Move::from_code(input)),
    }?;
    (mv.mode() == mode).then_some(mv)
}

/// Whether `raw` is a legal move in `mode`
pub fn validate(raw: &str, mode: GameMode) -> bool {
    canonicalize(raw, mode).is_some()
}

/// Matching the computer's move loses the round; anything else wins it
pub fn resolve_round(player: Move, computer: Move) -> RoundOutcome {
    if player.code() == computer.code() {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Win
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_moves_case_insensitive() {
        for (raw, expected) in [
            ("L", Move::Left),
            ("l", Move::Left),
            ("r", Move::Right),
            ("U", Move::Up),
            ("d", Move::Down),
        ] {
            assert_eq!(canonicalize(raw, GameMode::Basic), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_basic_rejects_other_input() {
        for raw in ["", "X", "LU", "A", "LL", "left", "1"] {
            assert!(!validate(raw, GameMode::Basic), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn test_advanced_shortcut_equivalence() {
        let expected = Some(Move::LeftUp);
        for raw in ["A", "a", "LU", "lu", "Lu", "lU"] {
            assert_eq!(canonicalize(raw, GameMode::Advanced), expected, "{raw}");
        }
        assert_eq!(canonicalize("b", GameMode::Advanced), Some(Move::LeftDown));
        assert_eq!(canonicalize("C", GameMode::Advanced), Some(Move::RightUp));
        assert_eq!(canonicalize("e", GameMode::Advanced), Some(Move::RightDown));
        assert_eq!(canonicalize("rd", GameMode::Advanced), Some(Move::RightDown));
    }

    #[test]
    fn test_advanced_rejects_basic_moves() {
        for raw in ["L", "r", "U", "D", "", "D ", "LUX", "UL", "F"] {
            assert!(!validate(raw, GameMode::Advanced), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(canonicalize(" l\n", GameMode::Basic), Some(Move::Left));
        assert_eq!(canonicalize("ru\r\n", GameMode::Advanced), Some(Move::RightUp));
    }

    #[test]
    fn test_canonical_codes() {
        let codes: Vec<_> = GameMode::Basic.moves().iter().map(|m| m.code()).collect();
        assert_eq!(codes, ["L", "R", "U", "D"]);
        let codes: Vec<_> = GameMode::Advanced.moves().iter().map(|m| m.code()).collect();
        assert_eq!(codes, ["LU", "LD", "RU", "RD"]);
    }

    #[test]
    fn test_matching_move_loses() {
        let player = canonicalize("l", GameMode::Basic).unwrap();
        assert_eq!(resolve_round(player, Move::Left), RoundOutcome::Loss);

        for &a in GameMode::Advanced.moves() {
            assert_eq!(resolve_round(a, a), RoundOutcome::Loss);
        }
    }

    #[test]
    fn test_different_move_wins() {
        assert_eq!(resolve_round(Move::Left, Move::Right), RoundOutcome::Win);

        for mode in [GameMode::Basic, GameMode::Advanced] {
            for &a in mode.moves() {
                for &b in mode.moves() {
                    if a != b {
                        assert_eq!(resolve_round(a, b), RoundOutcome::Win, "{a} vs {b}");
                    }
                }
            }
        }
    }
}
