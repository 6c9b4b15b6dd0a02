use super::{Command, CommandContext, CommandError, Outcome};

/// Lists the visible history window. The executor has already recorded the
/// `history` line itself, so it shows up first.
#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        ctx.state.history.write_recent(ctx.out)?;
        Ok(Outcome::Continue)
    }
}
