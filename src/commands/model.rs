use async_trait::async_trait;

use super::{Command, CommandResult, Session, StateChange};
use crate::config::Config;

pub struct ModelCommand;

#[async_trait]
impl Command for ModelCommand {
    fn name(&self) -> &str {
        "/model"
    }

    fn usage(&self) -> &str {
        "[id]"
    }

    fn description(&self) -> &str {
        "show or switch the active model"
    }

    async fn execute(&self, args: &str, session: &mut Session<'_>) -> CommandResult {
        if args.is_empty() {
            println!("  model  {}", session.model);
            return CommandResult::Handled;
        }

        if args == session.model {
            println!("  already using {args}");
            return CommandResult::Handled;
        }

        let saved = Config::open(session.db_path).and_then(|config| config.set_model(args));
        if let Err(e) = saved {
            eprintln!("  ✗ failed to save model choice: {e}");
            return CommandResult::Handled;
        }

        println!("  ✓ model changed to {args}");
        CommandResult::StateChanged(StateChange::Model(args.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::kitchen::Kitchen;

    #[tokio::test]
    async fn no_args_shows_current() {
        let mut kitchen = Kitchen::new();
        assert_eq!(
            ModelCommand.execute("", &mut test_session(&mut kitchen)).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn same_model_is_noop() {
        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        let current = session.model;
        assert_eq!(
            ModelCommand.execute(current, &mut session).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn switch_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.db");
        let path_str = path.to_str().unwrap();

        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        session.db_path = path_str;

        assert_eq!(
            ModelCommand.execute("claude-haiku-4-5", &mut session).await,
            CommandResult::StateChanged(StateChange::Model("claude-haiku-4-5".to_string()))
        );
        let config = Config::open(path_str).unwrap();
        assert_eq!(config.model().unwrap().as_deref(), Some("claude-haiku-4-5"));
    }
}
