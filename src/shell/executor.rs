use std::fmt::Display;
use std::io::{Read, Write};

use super::Shell;
use crate::core::commands::{CommandContext, Outcome};
use crate::error::ShellError;
use crate::input::history::{resolve, Resolution};
use crate::input::tokenize;

pub(crate) trait CommandHandler {
    /// Runs one input line through history resolution and dispatch.
    fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome, ShellError>;
}

impl<R: Read> CommandHandler for Shell<R> {
    fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome, ShellError> {
        let typed = tokenize(line);
        if typed.is_empty() {
            return Ok(Outcome::Continue);
        }

        let command = if typed.program().is_some_and(|name| name.starts_with('!')) {
            match resolve(&typed, &mut self.state.history, out) {
                Ok(Resolution::Resolved(command)) => Some(command),
                Ok(Resolution::Handled) => None,
                Err(e) => {
                    self.report(err, &e)?;
                    None
                }
            }
        } else {
            Some(typed)
        };

        let outcome = match command {
            None => Outcome::Continue,
            Some(command) => {
                let mut ctx = CommandContext {
                    state: &mut self.state,
                    out: &mut *out,
                };
                match self.executor.execute(&mut ctx, &command) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        self.report(err, &e)?;
                        Outcome::Continue
                    }
                }
            }
        };

        if outcome == Outcome::Exit {
            return Ok(outcome);
        }

        self.executor.reap();
        out.flush()?;
        Ok(outcome)
    }
}

impl<R: Read> Shell<R> {
    fn report(&self, err: &mut dyn Write, error: &dyn Display) -> Result<(), ShellError> {
        writeln!(err, "{}", self.highlighter.error(&error.to_string()))?;
        err.flush()?;
        Ok(())
    }
}
