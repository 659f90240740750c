use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::render;

pub struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "/list"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "show the ingredient list"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        println!("{}", render::ingredients(session.kitchen.ingredients()));
        if session.kitchen.state().is_loading() {
            println!("  {}", render::submit_label(session.kitchen));
        }
        CommandResult::Handled
    }
}
