use super::{Command, CommandContext, CommandError, Outcome};
use std::env;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "pwd does not take any arguments",
            ));
        }

        let cwd = env::current_dir().map_err(CommandError::CurrentDir)?;
        writeln!(ctx.out, "{}", cwd.display())?;
        Ok(Outcome::Continue)
    }
}
