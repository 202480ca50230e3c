//! Interactive controller for human players
//!
//! Reads moves line by line through the shell's [`Prompter`].

use crate::cli::Prompter;
use crate::game::controller::{PlayerController, RoundView};
use std::io::{BufRead, Write};
use tracing::debug;

/// A controller that prompts a human player for moves
pub struct InteractiveController<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> InteractiveController<'a, R, W> {
    pub fn new(prompter: &'a mut Prompter<R, W>) -> Self {
        InteractiveController { prompter }
    }
}

impl<'a, R: BufRead, W: Write> PlayerController for InteractiveController<'a, R, W> {
    fn next_input(&mut self, view: &RoundView) -> Option<String> {
        // A failed read is treated like end of input
        self.prompter.ask(view.mode.prompt()).ok()
    }

    fn on_invalid_input(&mut self, _view: &RoundView, _raw: &str) {
        // The next prompt fails the same way and ends the session
        if let Err(e) = self.prompter.say_line("Invalid move, please try again.") {
            debug!("could not report invalid move: {}", e);
        }
    }
}
