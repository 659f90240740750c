use async_trait::async_trait;

use super::{Command, CommandResult, Session};

/// Listed in the registry so it shows up in help; dispatch renders the
/// text itself since only the registry knows every command.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _session: &mut Session<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
