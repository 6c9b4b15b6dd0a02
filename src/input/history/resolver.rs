use std::io::Write;

use log::debug;

use super::{HistoryError, HistoryStore};
use crate::input::tokenizer::{tokenize, CommandLine};

const HISTORY_BUILTIN: &str = "history";

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A command recalled from history, to be dispatched as if typed.
    Resolved(CommandLine),
    /// Nothing further to execute.
    Handled,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Expands a `!`-prefixed command: `!!`, `!-` or `!<n>`.
///
/// The form is chosen by the character after `!`; anything after it in the
/// first token, and any further tokens, are ignored. The background flag of
/// the typed line carries over to the recalled command.
pub fn resolve(
    command: &CommandLine,
    history: &mut HistoryStore,
    out: &mut dyn Write,
) -> Result<Resolution, ResolveError> {
    let token = command.program().unwrap_or_default();
    let reference = token.strip_prefix('!').unwrap_or(token);

    let line = match reference.chars().next() {
        Some('!') => history.last().ok_or(HistoryError::Empty)?.to_owned(),
        Some('-') => {
            history.clear();
            writeln!(out, "History cleared")?;
            return Ok(Resolution::Handled);
        }
        _ => {
            let index = parse_index(reference).ok_or(HistoryError::InvalidNumber)?;
            history
                .get(index)
                .ok_or(HistoryError::InvalidNumber)?
                .to_owned()
        }
    };

    debug!("{} resolved to {:?}", token, line);
    writeln!(out, "{}", line)?;

    let mut resolved = tokenize(&line);
    resolved.background = command.background;

    if resolved.is_empty() {
        return Ok(Resolution::Handled);
    }

    if resolved.program() == Some(HISTORY_BUILTIN) {
        history.append(resolved.to_history_entry());
        history.write_recent(out)?;
        return Ok(Resolution::Handled);
    }

    Ok(Resolution::Resolved(resolved))
}

/// Leading decimal number, as `atoi` reads it. A result of zero only counts
/// when the text is exactly `"0"`.
fn parse_index(text: &str) -> Option<usize> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    let value = if end == 0 {
        0
    } else {
        unsigned[..end].parse::<usize>().ok()?
    };

    if value == 0 && text != "0" {
        return None;
    }
    Some(value)
}
