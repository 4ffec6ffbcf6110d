//! # Console
//!
//! Line-oriented prompt/answer I/O over any `BufRead` + `Write` pair, so the
//! interactive flows run the same against a terminal or an in-memory script.
//!
//! ```text
//! prompt ──► write + flush ──► read_line ──┬── Some(answer)
//!                                           └── None (end of input)
//! ```
//!
//! End of input is reported as `None` at every level; callers unwind
//! quietly instead of treating it as an error.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Prompt/answer channel for the interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `prompt` without a newline and reads one answer.
    ///
    /// The line terminator is stripped; everything else is kept as typed.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Reads a whole number, repeating `invalid` until one is given.
    ///
    /// Range checks are left to the caller.
    pub fn choose(&mut self, prompt: &str, invalid: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match answer.trim().parse::<i64>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => {
                    warn!(input = %answer, "menu choice is not a number");
                    self.say(invalid)?;
                }
            }
        }
    }

    /// Re-asks `prompt` until `validate` accepts the answer.
    ///
    /// Each rejection prints `ERROR: <reason>` on its own paragraph.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut validate: F) -> io::Result<Option<T>>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!(input = %answer, "answer rejected");
                    self.say(format_args!("\nERROR: {err}"))?;
                }
            }
        }
    }

    /// Waits for Enter before the program ends.
    pub fn pause(&mut self) -> io::Result<()> {
        self.prompt("\nPress Enter to exit...")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
