use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::render;

pub struct RemoveCommand;

#[async_trait]
impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "/remove"
    }

    fn aliases(&self) -> &[&str] {
        &["/rm"]
    }

    fn usage(&self) -> &str {
        "<ingredient>"
    }

    fn description(&self) -> &str {
        "remove an ingredient from the list"
    }

    async fn execute(&self, args: &str, session: &mut Session<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /remove <ingredient>");
            return CommandResult::Handled;
        }
        if !session.kitchen.remove_ingredient(args) {
            println!("  not on the list: {args}");
        }
        println!("{}", render::ingredients(session.kitchen.ingredients()));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::kitchen::Kitchen;

    #[tokio::test]
    async fn removes_exact_match() {
        let mut kitchen = Kitchen::new();
        kitchen.add_ingredient("chicken");
        kitchen.add_ingredient("garlic");
        RemoveCommand
            .execute("chicken", &mut test_session(&mut kitchen))
            .await;
        assert_eq!(kitchen.ingredients().as_slice(), ["garlic"]);
    }

    #[tokio::test]
    async fn absent_is_noop() {
        let mut kitchen = Kitchen::new();
        kitchen.add_ingredient("garlic");
        let result = RemoveCommand
            .execute("basil", &mut test_session(&mut kitchen))
            .await;
        assert_eq!(result, CommandResult::Handled);
        assert_eq!(kitchen.ingredients().len(), 1);
    }
}
