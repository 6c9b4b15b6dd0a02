use std::io::{self, Write};

use super::{Command, CommandContext, CommandError, Outcome};

const HELP_TEXT: &str = "\
Internal commands:
exit: Exit the shell program. If any argument is provided, an error is displayed.
pwd: Display the current working directory. Takes no arguments.
cd: Change the current working directory. Accepts one argument (absolute or relative path, ~, ~/path or -).
help: Display this help information, or a short description of one command.
history: Show command history. Displays the last 10 commands executed.
!!: Repeat the last command executed.
!n: Repeat the nth command from the history.
!-: Clear the command history.
";

pub fn write_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    out.write_all(HELP_TEXT.as_bytes())
}

/// One-line description of `name`. Any `!` followed by a digit counts as the
/// `!n` form, whether or not that entry exists.
pub fn describe(name: &str) -> String {
    let purpose = match name {
        "exit" => "exiting the shell",
        "pwd" => "printing the current working directory",
        "cd" => "changing the current working directory",
        "help" => "displaying this help message",
        "history" => "displaying the command history",
        "!!" => "repeating the last command executed",
        "!-" => "clearing the command history",
        _ if is_numbered_reference(name) => {
            "repeating the nth command from the history"
        }
        _ => return format!("{} is an external command or application", name),
    };

    let shown = if is_numbered_reference(name) { "!n" } else { name };
    format!("'{}' is a builtin command for {}.", shown, purpose)
}

fn is_numbered_reference(name: &str) -> bool {
    name.strip_prefix('!')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        match args {
            [] => write_help(ctx.out)?,
            [name] => writeln!(ctx.out, "{}", describe(name))?,
            _ => {
                return Err(CommandError::InvalidArguments(
                    "help takes at most one argument",
                ))
            }
        }
        Ok(Outcome::Continue)
    }
}
