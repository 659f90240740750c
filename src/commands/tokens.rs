use async_trait::async_trait;

use super::{Command, CommandResult, Session};
use crate::consts::format_number;

pub struct TokensCommand;

#[async_trait]
impl Command for TokensCommand {
    fn name(&self) -> &str {
        "/tokens"
    }

    fn description(&self) -> &str {
        "show session token usage"
    }

    async fn execute(&self, _args: &str, session: &mut Session<'_>) -> CommandResult {
        let usage = session.usage;
        if usage.total() == 0 {
            println!("  no tokens used this session");
        } else {
            println!(
                "  {} input + {} output = {} total",
                format_number(usage.input_tokens),
                format_number(usage.output_tokens),
                format_number(usage.total()),
            );
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::completion::TokenUsage;
    use crate::kitchen::Kitchen;

    #[tokio::test]
    async fn returns_handled_with_and_without_usage() {
        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        assert_eq!(
            TokensCommand.execute("", &mut session).await,
            CommandResult::Handled
        );
        session.usage = TokenUsage {
            input_tokens: 1234,
            output_tokens: 567,
        };
        assert_eq!(
            TokensCommand.execute("", &mut session).await,
            CommandResult::Handled
        );
    }
}
