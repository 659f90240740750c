use async_trait::async_trait;

use super::{Command, CommandResult, Session};

pub struct FindCommand;

#[async_trait]
impl Command for FindCommand {
    fn name(&self) -> &str {
        "/find"
    }

    fn aliases(&self) -> &[&str] {
        &["/go"]
    }

    fn description(&self) -> &str {
        "ask the model for three recipes"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        // Submit is disabled while a search is in flight.
        if session.kitchen.state().is_loading() {
            println!("  still finding recipes, hang on...");
            return CommandResult::Handled;
        }
        CommandResult::Search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::kitchen::Kitchen;

    #[tokio::test]
    async fn requests_search_when_idle() {
        let mut kitchen = Kitchen::new();
        kitchen.add_ingredient("egg");
        assert_eq!(
            FindCommand.execute("", &mut test_session(&mut kitchen)).await,
            CommandResult::Search
        );
    }

    #[tokio::test]
    async fn empty_list_still_requests_search() {
        // Validation happens when the search begins, so the error line is set.
        let mut kitchen = Kitchen::new();
        assert_eq!(
            FindCommand.execute("", &mut test_session(&mut kitchen)).await,
            CommandResult::Search
        );
    }

    #[tokio::test]
    async fn refused_while_loading() {
        let mut kitchen = Kitchen::new();
        kitchen.add_ingredient("egg");
        kitchen.begin_search().unwrap();
        assert_eq!(
            FindCommand.execute("", &mut test_session(&mut kitchen)).await,
            CommandResult::Handled
        );
    }
}
