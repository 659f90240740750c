use async_trait::async_trait;

use super::{Command, CommandResult, Session, StateChange};
use crate::auth;
use crate::auth::storage::KeySource;

pub struct LoginCommand;

#[async_trait]
impl Command for LoginCommand {
    fn name(&self) -> &str {
        "/login"
    }

    fn usage(&self) -> &str {
        "<api-key>"
    }

    fn description(&self) -> &str {
        "store an Anthropic API key"
    }

    async fn execute(&self, args: &str, session: &mut Session<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /login <api-key>");
            return CommandResult::Handled;
        }

        match auth::login(session.db_path, args) {
            Ok(()) => {
                println!("  ✓ API key saved");
                let status = auth::status_label(Some(KeySource::Stored));
                CommandResult::StateChanged(StateChange::Auth(status.to_string()))
            }
            Err(e) => {
                eprintln!("  ✗ login failed: {e:#}");
                CommandResult::Handled
            }
        }
    }
}
