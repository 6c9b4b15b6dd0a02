use std::collections::BTreeMap;
use std::io::{self, Write};

use log::debug;
use thiserror::Error;

mod cd;
mod exit;
mod help;
mod history;
mod pwd;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::{describe, write_help, HelpCommand};
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use crate::config::Config;
use crate::core::state::ShellState;
use crate::input::CommandLine;
use crate::process::{Launch, ProcessError, ProcessLauncher};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(&'static str),
    #[error("Path too long")]
    PathTooLong,
    #[error("chdir() error: {0}")]
    ChangeDirectory(#[source] io::Error),
    #[error("getcwd() error: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error(transparent)]
    ProcessError(#[from] ProcessError),
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Help(HelpCommand),
    History(HistoryCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Pwd(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::History(cmd) => cmd.execute(ctx, args),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    launcher: ProcessLauncher,
}

impl CommandExecutor {
    pub fn new(config: &Config) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new()));
        commands.insert(
            "cd".to_string(),
            CommandType::Cd(CdCommand::new(config.line_length)),
        );
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        commands.insert(
            "history".to_string(),
            CommandType::History(HistoryCommand::new()),
        );

        Self {
            commands,
            launcher: ProcessLauncher::new(),
        }
    }

    /// Records `command` in history, then runs it as a builtin or launches
    /// it as a child process.
    pub fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        command: &CommandLine,
    ) -> Result<Outcome, CommandError> {
        let Some(name) = command.program() else {
            return Ok(Outcome::Continue);
        };

        ctx.state.history.append(command.to_history_entry());

        if let Some(cmd) = self.commands.get(name) {
            return cmd.execute(ctx, command.params());
        }

        if let Launch::Background(pid) = self.launcher.launch(command)? {
            debug!("{} left running as pid {}", name, pid);
        }
        Ok(Outcome::Continue)
    }

    #[cfg(test)]
    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn reap(&self) {
        self.launcher.reap();
    }
}
