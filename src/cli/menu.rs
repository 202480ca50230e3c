//! Text menus for the `cham` binary
//!
//! The menus only collect validated values and print results; every rule
//! lives in [`Arcade`] and the stores behind it.

use crate::arcade::Arcade;
use crate::cli::Prompter;
use crate::game::{GameMode, InteractiveController, OpponentController, MAX_ROUNDS};
use crate::storage::{format_profile_details, format_profile_list, format_scoreboard, Persistence};
use crate::{ChamError, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const DIVIDER: &str = "----------------------------------------";

const INSTRUCTIONS: &str = "Welcome to Cham Cham Cham!

Basic mode moves:
L - Left
R - Right
U - Up
D - Down

Advanced mode moves:
A - LU (Left-Up)
B - LD (Left-Down)
C - RU (Right-Up)
E - RD (Right-Down)
Or directly input two-letter moves LU, LD, RU, RD.

How to play:
- Choose your profile or create one.
- Choose basic or advanced mode.
- Enter moves each round.
- You win the round if your move differs from the computer's move.
- The game ends after selected rounds.

Good luck and have fun!";

/// Ranked scoreboard, or a notice when nobody has won yet
pub fn scoreboard_text(arcade: &Arcade) -> String {
    let entries = arcade.ledger().render_scoreboard();
    if entries.is_empty() {
        "No scores available yet.".to_string()
    } else {
        format_scoreboard(&entries)
    }
}

/// Full session history, or a notice when it is empty
pub fn stats_text(arcade: &Arcade) -> Result<String> {
    Ok(arcade
        .stats()
        .render_history()?
        .map(|history| history.trim_end().to_string())
        .unwrap_or_else(|| "No game stats recorded yet.".to_string()))
}

pub fn profiles_text(arcade: &Arcade) -> String {
    if arcade.profiles().is_empty() {
        "No profiles available.".to_string()
    } else {
        format_profile_list(arcade.profiles().profiles())
    }
}

/// Interactive shell over an [`Arcade`]
pub struct Menu<'a, R, W> {
    arcade: &'a mut Arcade,
    prompter: Prompter<R, W>,
    opponent: Box<dyn OpponentController>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        arcade: &'a mut Arcade,
        prompter: Prompter<R, W>,
        opponent: Box<dyn OpponentController>,
    ) -> Self {
        Menu {
            arcade,
            prompter,
            opponent,
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run the main menu until the player exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(ChamError::InputClosed) => {
                debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.header("Main Menu")?;
            self.prompter.say_line("1) Play Game")?;
            self.prompter.say_line("2) Profiles Management")?;
            self.prompter.say_line("3) Scoreboard")?;
            self.prompter.say_line("4) View Game Stats")?;
            self.prompter.say_line("5) Instructions")?;
            self.prompter.say_line("0) Exit")?;
            self.prompter.say_line(DIVIDER)?;

            let result = match self.prompter.int_in_range("Enter your choice: ", 0, 5)? {
                1 => self.play(),
                2 => self.profiles_menu(),
                3 => self.show_scoreboard(),
                4 => self.show_stats(),
                5 => self.show_instructions(),
                _ => {
                    self.prompter.say_line("Thank you for playing Cham Cham Cham!")?;
                    return Ok(());
                }
            };
            self.report_error(result)?;
        }
    }

    fn profiles_menu(&mut self) -> Result<()> {
        loop {
            self.header("Profiles Management")?;
            self.prompter.say_line("1) List Profiles")?;
            self.prompter.say_line("2) Add New Profile")?;
            self.prompter.say_line("3) Rename Profile")?;
            self.prompter.say_line("4) Delete Profile")?;
            self.prompter.say_line("5) View Profile Details")?;
            self.prompter.say_line("0) Return to Main Menu")?;
            self.prompter.say_line(DIVIDER)?;

            let choice = self.prompter.int_in_range("Enter choice: ", 0, 5)?;
            let result = match choice {
                1 => self.list_profiles(),
                2 => self.add_profile(),
                3 => self.rename_profile(),
                4 => self.delete_profile(),
                5 => self.view_profile(),
                _ => return Ok(()),
            };
            self.report_error(result)?;
            // Edits leave their message on screen until the player moves on
            if (2..=4).contains(&choice) {
                self.prompter.pause()?;
            }
        }
    }

    /// Print a recoverable error and carry on; only closed input propagates
    ///
    /// Rule violations are shown as plain messages. Anything else is also
    /// logged, since it points at the data files rather than the player.
    fn report_error(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(ChamError::InputClosed) => Err(ChamError::InputClosed),
            Err(e) if e.is_constraint() => self.prompter.say_line(&e.to_string()),
            Err(e) => {
                warn!("menu action failed: {}", e);
                self.prompter.say_line(&format!("Error: {e}"))
            }
        }
    }

    fn report_persistence(&mut self, persistence: Persistence) -> Result<()> {
        match persistence.warning() {
            None => Ok(()),
            Some(e) => self
                .prompter
                .say_line(&format!("Warning: changes were not saved ({e})")),
        }
    }

    fn header(&mut self, title: &str) -> Result<()> {
        self.prompter.say_line(DIVIDER)?;
        self.prompter.say_line(&format!("  {title}"))?;
        self.prompter.say_line(DIVIDER)
    }

    /// List profiles and ask for one; `None` if there are none
    fn select_profile(&mut self, prompt: &str) -> Result<Option<usize>> {
        let count = self.arcade.profiles().len();
        if count == 0 {
            self.prompter.say_line("No profiles available.")?;
            return Ok(None);
        }
        let listing = profiles_text(self.arcade);
        self.prompter.say_line(&listing)?;
        let choice = self.prompter.int_in_range(prompt, 1, count as i64)?;
        Ok(Some(choice as usize - 1))
    }

    fn play(&mut self) -> Result<()> {
        if self.arcade.profiles().is_empty() {
            self.prompter
                .say_line("No profiles available. Please add one first.")?;
            return self.prompter.pause();
        }
        let Some(index) = self.select_profile("Select your profile number: ")? else {
            return Ok(());
        };
        let name = match self.arcade.profiles().get(index) {
            Some(profile) => profile.name.to_string(),
            None => return Ok(()),
        };
        self.prompter.say_line(&format!("Welcome {name}!"))?;

        let mode = if self.prompter.confirm_yes_no("Use Advanced mode (A/B/C/E)?")? {
            GameMode::Advanced
        } else {
            GameMode::Basic
        };
        let rounds = self.prompter.int_in_range(
            &format!("Enter number of rounds (1-{MAX_ROUNDS}): "),
            1,
            i64::from(MAX_ROUNDS),
        )? as u32;

        let report = {
            let mut player = InteractiveController::new(&mut self.prompter);
            self.arcade
                .play_session(index, mode, rounds, &mut player, self.opponent.as_mut())?
        };

        if report.score_recorded {
            self.prompter
                .say_line("Your result has been added to the scoreboard.")?;
        }
        for warning in &report.warnings {
            self.prompter.say_line(&format!("Warning: {warning}"))?;
        }
        self.prompter.pause()
    }

    fn list_profiles(&mut self) -> Result<()> {
        let listing = profiles_text(self.arcade);
        self.prompter.say_line(&listing)?;
        self.prompter.pause()
    }

    fn add_profile(&mut self) -> Result<()> {
        if self.arcade.profiles().is_full() {
            let limit = self.arcade.config().max_profiles;
            return Err(ChamError::CapacityExceeded(limit));
        }
        let name = self.prompter.ask("Enter new player name: ")?;
        let persistence = self.arcade.profiles_mut().add(&name)?;
        self.prompter
            .say_line(&format!("Profile '{}' added successfully.", name.trim()))?;
        self.report_persistence(persistence)
    }

    fn rename_profile(&mut self) -> Result<()> {
        let Some(index) = self.select_profile("Select profile number to rename: ")? else {
            return Ok(());
        };
        if let Some(profile) = self.arcade.profiles().get(index) {
            let current = format!("Current name: {}", profile.name);
            self.prompter.say_line(&current)?;
        }
        let new_name = self.prompter.ask("Enter new name: ")?;
        let persistence = self.arcade.profiles_mut().rename(index, &new_name)?;
        self.prompter.say_line("Profile renamed successfully.")?;
        self.report_persistence(persistence)
    }

    fn delete_profile(&mut self) -> Result<()> {
        let Some(index) = self.select_profile("Select profile number to delete: ")? else {
            return Ok(());
        };
        let name = match self.arcade.profiles().get(index) {
            Some(profile) => profile.name.to_string(),
            None => return Ok(()),
        };
        self.prompter.say_line(&format!(
            "Are you sure you want to delete '{name}'? This cannot be undone."
        ))?;
        if !self.prompter.confirm_yes_no("Confirm delete")? {
            return self.prompter.say_line("Deletion canceled.");
        }
        let (_removed, persistence) = self.arcade.profiles_mut().delete(index)?;
        self.prompter.say_line("Profile deleted.")?;
        self.report_persistence(persistence)
    }

    fn view_profile(&mut self) -> Result<()> {
        let Some(index) = self.select_profile("Select profile number to view: ")? else {
            return self.prompter.pause();
        };
        if let Some(profile) = self.arcade.profiles().get(index) {
            let details = format_profile_details(profile);
            self.prompter.say_line(&details)?;
        }
        self.prompter.pause()
    }

    fn show_scoreboard(&mut self) -> Result<()> {
        self.header("Scoreboard")?;
        let board = scoreboard_text(self.arcade);
        self.prompter.say_line(&board)?;
        self.prompter.say_line(DIVIDER)?;
        self.prompter.pause()
    }

    fn show_stats(&mut self) -> Result<()> {
        self.header("Game Stats")?;
        let stats = stats_text(self.arcade)?;
        self.prompter.say_line(&stats)?;
        self.prompter.pause()
    }

    fn show_instructions(&mut self) -> Result<()> {
        self.header("Instructions")?;
        self.prompter.say_line(INSTRUCTIONS)?;
        self.prompter.say_line(DIVIDER)?;
        self.prompter.pause()
    }
}
