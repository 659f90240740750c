use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::render;

pub struct AddCommand;

#[async_trait]
impl Command for AddCommand {
    fn name(&self) -> &str {
        "/add"
    }

    fn usage(&self) -> &str {
        "<ingredient>"
    }

    fn description(&self) -> &str {
        "add an ingredient to the list"
    }

    async fn execute(&self, args: &str, session: &mut Session<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /add <ingredient>");
            return CommandResult::Handled;
        }
        if !session.kitchen.add_ingredient(args) {
            println!("  already on the list: {args}");
        }
        println!("{}", render::ingredients(session.kitchen.ingredients()));
        CommandResult::Handled
    }
}
