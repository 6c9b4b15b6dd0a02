use std::env;
use std::io::{self, Read, Write};

use log::{debug, warn};

mod executor;
mod prompt;

use crate::{
    config::Config,
    core::commands::{write_help, CommandExecutor, Outcome},
    core::state::ShellState,
    error::ShellError,
    highlight::Highlighter,
    input::{LineReader, RawStdin, ReadOutcome},
    process::InterruptFlag,
    stats::{StatsSource, SystemStats},
};

use executor::CommandHandler;

pub struct Shell<R = RawStdin> {
    pub(crate) state: ShellState,
    pub(crate) reader: LineReader<R>,
    pub(crate) interrupts: InterruptFlag,
    pub(crate) executor: CommandExecutor,
    pub(crate) stats: Box<dyn StatsSource>,
    pub(crate) highlighter: Highlighter,
}

impl Shell<RawStdin> {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let interrupts = InterruptFlag::install()?;
        let state = ShellState::from_process(&config)?;

        Ok(Self::with_parts(
            &config,
            state,
            RawStdin,
            interrupts,
            Box::new(SystemStats::new()),
        ))
    }
}

impl<R: Read> Shell<R> {
    pub fn with_parts(
        config: &Config,
        state: ShellState,
        input: R,
        interrupts: InterruptFlag,
        stats: Box<dyn StatsSource>,
    ) -> Self {
        let highlighter = if config.color {
            Highlighter::new()
        } else {
            Highlighter::plain()
        };

        Shell {
            state,
            reader: LineReader::new(input, config.max_line_bytes()),
            interrupts,
            executor: CommandExecutor::new(config),
            stats,
            highlighter,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.run_with(&mut io::stdout(), &mut io::stderr())
    }

    /// Prompt, read, dispatch, until `exit` or end of input.
    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        loop {
            tolerate_output(self.show_prompt(out, err))?;

            let read = self.reader.read_line().map_err(ShellError::Read)?;

            if self.interrupts.take() {
                debug!("read cycle interrupted");
                let shown = write_help(out).and_then(|()| out.flush());
                tolerate_output(shown.map_err(ShellError::from))?;
                continue;
            }

            let line = match read {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    debug!("end of input");
                    return Ok(());
                }
            };

            if tolerate_output(self.handle_line(&line, out, err))? == Some(Outcome::Exit) {
                return Ok(());
            }
        }
    }

    fn show_prompt(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        match env::current_dir() {
            Ok(cwd) => {
                let cpu = self.stats.cpu();
                let memory = self.stats.memory();
                write!(out, "{}", prompt::render(&cwd, &cpu, &memory))?;
                out.flush()?;
            }
            Err(e) => {
                writeln!(err, "{}", self.highlighter.error(&format!("getcwd() error: {}", e)))?;
            }
        }
        Ok(())
    }
}

/// Output failures are reported and the loop goes on; only reading input
/// can end the session with an error.
fn tolerate_output<T>(result: Result<T, ShellError>) -> Result<Option<T>, ShellError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ShellError::Io(e)) => {
            warn!("output error: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
