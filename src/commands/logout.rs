use async_trait::async_trait;

use super::{Command, CommandResult, Session, StateChange};
use crate::auth;

pub struct LogoutCommand;

#[async_trait]
impl Command for LogoutCommand {
    fn name(&self) -> &str {
        "/logout"
    }

    fn description(&self) -> &str {
        "forget the stored API key"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        if let Err(e) = auth::logout(session.db_path) {
            eprintln!("  ✗ logout failed: {e:#}");
            return CommandResult::Handled;
        }

        println!("  ✓ stored API key removed");
        CommandResult::StateChanged(StateChange::Auth(auth::status_label(None).to_string()))
    }
}
