use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::kitchen::RequestState;
use crate::render;

pub struct RecipesCommand;

#[async_trait]
impl Command for RecipesCommand {
    fn name(&self) -> &str {
        "/recipes"
    }

    fn description(&self) -> &str {
        "show the result of the last search"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        match session.kitchen.state() {
            RequestState::Idle => println!("  no search yet, try /find"),
            state => println!("{}", render::outcome(state)),
        }
        CommandResult::Handled
    }
}
