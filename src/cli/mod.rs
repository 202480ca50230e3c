//! Interactive shell: prompting helpers and menus

pub mod menu;
pub mod prompt;

pub use menu::{profiles_text, scoreboard_text, stats_text, Menu};
pub use prompt::Prompter;
