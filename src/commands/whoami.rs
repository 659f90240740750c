use async_trait::async_trait;

use super::{Command, CommandResult, Session};

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &str {
        "/whoami"
    }

    fn description(&self) -> &str {
        "show model, auth status, and config location"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        println!("  model   {}", session.model);
        println!("  auth    {}", session.auth_status);
        println!("  config  {}", session.db_path);
        CommandResult::Handled
    }
}
