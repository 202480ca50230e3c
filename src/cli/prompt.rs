//! Line-based prompting helpers
//!
//! Generic over the reader and writer so the shell can be driven from a
//! byte buffer in tests. End of input surfaces as [`ChamError::InputClosed`];
//! everything else re-prompts.

use crate::{ChamError, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print without a trailing newline
    pub fn say(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line with the line ending stripped
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChamError::InputClosed);
        }
        let stripped = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(stripped.to_string())
    }

    /// Show `prompt` and read the answer
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Ask until the answer is an integer within `min..=max`
    pub fn int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let line = self.ask(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => {
                    self.say_line(&format!("Please enter a number between {min} and {max}."))?
                }
                Err(_) => self.say_line("Invalid number, please enter a valid integer.")?,
            }
        }
    }

    /// Ask a y/n question; only the first character counts
    pub fn confirm_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.ask(&format!("{prompt} (y/n): "))?;
            match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                Some(_) => self.say_line("Please answer 'y' or 'n'.")?,
                None => {}
            }
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        self.ask("Press Enter to continue...")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
