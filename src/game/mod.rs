//! Move resolution and the session loop

pub mod controller;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod moves;
pub mod random_controller;
pub mod scripted_controller;
pub mod session;

pub use controller::{OpponentController, PlayerController, RoundView};
pub use game_loop::{GameLoop, VerbosityLevel};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputMode};
pub use moves::{canonicalize, resolve_round, validate, GameMode, Move, RoundOutcome};
pub use random_controller::RandomOpponent;
pub use scripted_controller::{ScriptedOpponent, ScriptedPlayer};
pub use session::{GameSession, RoundRecord, SessionOutcome, MAX_ROUNDS};
