use super::{Command, CommandContext, CommandError, Outcome};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "exit does not take any arguments",
            ));
        }
        Ok(Outcome::Exit)
    }
}
