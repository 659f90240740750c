//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! argument splitting, and help generation. Input that is not a command
//! is an ingredient.

mod add;
mod find;
mod help;
mod list;
mod login;
mod logout;
mod model;
mod quit;
mod recipes;
mod remove;
mod tokens;
mod whoami;

use async_trait::async_trait;
use std::sync::Arc;

use crate::completion::TokenUsage;
use crate::kitchen::Kitchen;

/// Session state available to commands during execution.
pub struct Session<'a> {
    pub kitchen: &'a mut Kitchen,
    pub model: &'a str,
    pub auth_status: &'a str,
    pub usage: TokenUsage,
    pub db_path: &'a str,
}

/// A state change the REPL needs to apply after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Auth status changed (new status string).
    Auth(String),
    /// Active model changed (new model ID).
    Model(String),
}

/// What the REPL should do after a command runs.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command; treat the input as an ingredient.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Command produced a state change the REPL must apply.
    StateChanged(StateChange),
    /// Start a recipe search.
    Search,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/find"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument placeholder for `/help`, e.g. `"<ingredient>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is the trimmed text after the name.
    async fn execute(&self, args: &str, session: &mut Session<'_>) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(add::AddCommand),
            Arc::new(remove::RemoveCommand),
            Arc::new(list::ListCommand),
            Arc::new(find::FindCommand),
            Arc::new(recipes::RecipesCommand),
            Arc::new(model::ModelCommand),
            Arc::new(whoami::WhoamiCommand),
            Arc::new(tokens::TokensCommand),
            Arc::new(login::LoginCommand),
            Arc::new(logout::LogoutCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, session: &mut Session<'_>) -> CommandResult {
        let (cmd, args) = split_command(input);

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help is special, it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, session).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::from("  <ingredient>  add an ingredient (same as /add)\n");
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    /// All registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `"/add  olive oil "` into `("/add", "olive oil")`.
fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (input, ""),
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_session(kitchen: &mut Kitchen) -> Session<'_> {
        Session {
            kitchen,
            model: "claude-sonnet-4-20250514",
            auth_status: "API key ✓",
            usage: TokenUsage::default(),
            db_path: ":memory:",
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in [
            "/help", "/add", "/remove", "/list", "/find", "/recipes", "/model", "/whoami",
            "/tokens", "/login", "/logout", "/quit",
        ] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
        assert!(text.contains("/remove <ingredient> (/rm)"));
    }

    #[test]
    fn split_command_separates_args() {
        assert_eq!(split_command("/add  olive oil "), ("/add", "olive oil"));
        assert_eq!(split_command("  /find"), ("/find", ""));
        assert_eq!(split_command("garlic"), ("garlic", ""));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        assert_eq!(
            reg.dispatch("/foobar", &mut session).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn plain_text_is_not_a_command() {
        let reg = CommandRegistry::new();
        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        assert_eq!(
            reg.dispatch("chicken", &mut session).await,
            CommandResult::NotACommand
        );
        assert_eq!(
            reg.dispatch("olive oil", &mut session).await,
            CommandResult::NotACommand
        );
    }

    #[tokio::test]
    async fn dispatch_passes_args() {
        let reg = CommandRegistry::new();
        let mut kitchen = Kitchen::new();
        {
            let mut session = test_session(&mut kitchen);
            reg.dispatch("/add olive oil", &mut session).await;
        }
        assert_eq!(kitchen.ingredients().as_slice(), ["olive oil"]);
    }

    #[tokio::test]
    async fn registered_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _session: &mut Session<'_>) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        let mut kitchen = Kitchen::new();
        let mut session = test_session(&mut kitchen);
        assert_eq!(reg.dispatch("/ping", &mut session).await, CommandResult::Handled);
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_variants() {
        assert_eq!(format_label("/whoami", "", &[]), "/whoami");
        assert_eq!(format_label("/help", "", &["/h", "/?"]), "/help (/h, /?)");
        assert_eq!(format_label("/add", "<ingredient>", &[]), "/add <ingredient>");
    }
}
