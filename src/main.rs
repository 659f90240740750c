use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, warn};

use rikucook::auth::{self, AuthStorage};
use rikucook::banner::{BannerInfo, print_banner, print_session_summary};
use rikucook::commands::{CommandRegistry, CommandResult, Session, StateChange};
use rikucook::completion::TokenUsage;
use rikucook::completion::anthropic::AnthropicClient;
use rikucook::config::Config;
use rikucook::consts::{
    API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, PROVIDER, default_db_path,
};
use rikucook::error::{FindError, RequestError};
use rikucook::kitchen::finder::{RecipeFinder, Settled};
use rikucook::kitchen::{Kitchen, RequestState, Ticket};
use rikucook::spinner::spin_while;
use rikucook::{logging, render};

#[derive(Parser)]
#[command(name = "rikucook", version, about = "What's in your fridge? Recipe ideas from what you have.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Model name (overrides the one saved with /model)
    #[arg(long)]
    model: Option<String>,

    /// SQLite database for config and credentials (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Completion API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Output token budget per request
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Comma-separated ingredients: search once and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// More diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Store an Anthropic API key
    Login {
        /// The key; prompted for when omitted
        key: Option<String>,
    },
    /// Remove the stored API key
    Logout,
}

/// A search running in the background, tagged with its ticket.
type InFlight = Option<(Ticket, JoinHandle<Settled>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let db_path = resolve_db_path(cli.db.as_deref())?;

    if let Some(command) = &cli.command {
        return match command {
            Command::Login { key } => handle_login(&db_path, key.as_deref()),
            Command::Logout => {
                auth::logout(&db_path)?;
                println!("✓ Stored API key removed.");
                Ok(())
            }
        };
    }

    let config = Config::open(&db_path)?;
    let model = match cli.model {
        Some(model) => model,
        None => config
            .model()?
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    };

    let (mut finder, mut auth_status) = build_finder(&db_path, &cli.endpoint)?;
    finder = finder.with_model(model).with_max_tokens(cli.max_tokens);

    let mut kitchen = Kitchen::new();
    let mut usage = TokenUsage::default();

    // Single search mode
    if let Some(list) = cli.run {
        for item in list.split(',') {
            kitchen.add_ingredient(item);
        }
        if let Ok(pending) = kitchen.begin_search() {
            let settled = spin_while(render::submit_label(&kitchen), finder.run(pending)).await;
            if let Some(u) = settled.usage {
                usage.add(u);
            }
            kitchen.finish_search(settled.ticket, settled.outcome);
        }
        let failed = matches!(kitchen.state(), RequestState::Failed(_));
        println!("{}", render::outcome(kitchen.state()));
        print_session_summary(usage);
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let db_label = if db_path == ":memory:" {
        "ephemeral"
    } else {
        db_path.as_str()
    };
    print_banner(&BannerInfo {
        model: finder.model(),
        auth_status: &auth_status,
        endpoint: &cli.endpoint,
        db: db_label,
    });

    let registry = CommandRegistry::new();
    let mut in_flight: InFlight = None;

    // REPL: input stays live while a search runs in the background
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nrikucook> ");
        io::stdout().flush()?;

        tokio::select! {
            result = lines.next_line() => {
                let line = match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                };

                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let mut session = Session {
                    kitchen: &mut kitchen,
                    model: finder.model(),
                    auth_status: &auth_status,
                    usage,
                    db_path: &db_path,
                };

                match registry.dispatch(input, &mut session).await {
                    CommandResult::NotACommand => {
                        kitchen.add_ingredient(input);
                        println!("{}", render::ingredients(kitchen.ingredients()));
                    }
                    CommandResult::Handled => {}
                    CommandResult::Search => {
                        start_search(&mut kitchen, &finder, &mut in_flight);
                    }
                    CommandResult::StateChanged(StateChange::Model(model)) => {
                        finder.set_model(model);
                    }
                    CommandResult::StateChanged(StateChange::Auth(status)) => {
                        debug!(%status, "credentials changed");
                        // Pick up the new credential for the next search
                        refresh_credentials(
                            &mut finder,
                            &mut auth_status,
                            &db_path,
                            &cli.endpoint,
                            cli.max_tokens,
                        );
                    }
                    CommandResult::Quit => break,
                }
            }
            joined = wait_for(&mut in_flight) => {
                if let Some((ticket, _)) = in_flight.take() {
                    let settled = settle(ticket, joined);
                    if let Some(u) = settled.usage {
                        usage.add(u);
                    }
                    if kitchen.finish_search(settled.ticket, settled.outcome) {
                        println!("\n{}", render::outcome(kitchen.state()));
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    print_session_summary(usage);
    Ok(())
}

fn resolve_db_path(arg: Option<&str>) -> anyhow::Result<String> {
    if let Some(path) = arg {
        return Ok(path.to_string());
    }
    let path: PathBuf = default_db_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    Ok(path.to_string_lossy().into_owned())
}

/// Resolve the credential and wire up a finder against `endpoint`.
fn build_finder(db_path: &str, endpoint: &str) -> anyhow::Result<(RecipeFinder, String)> {
    let storage = AuthStorage::open(db_path)?;
    let resolved = storage.resolve(PROVIDER, API_KEY_ENV)?;
    let status = auth::status_label(resolved.as_ref().map(|r| r.source)).to_string();
    if resolved.is_none() {
        warn!("no API key configured; requests will be sent unauthenticated");
    }

    let client = AnthropicClient::new(resolved.map(|r| r.key)).with_endpoint(endpoint);
    Ok((RecipeFinder::new(Arc::new(client)), status))
}

/// Rebuild the finder after `/login` or `/logout`. When the credential
/// store cannot be read the previous finder and status stay in place.
fn refresh_credentials(
    finder: &mut RecipeFinder,
    auth_status: &mut String,
    db_path: &str,
    endpoint: &str,
    max_tokens: u32,
) {
    match build_finder(db_path, endpoint) {
        Ok((rebuilt, status)) => {
            let model = finder.model().to_string();
            *finder = rebuilt.with_model(model).with_max_tokens(max_tokens);
            *auth_status = status;
        }
        Err(e) => {
            error!(error = %e, "failed to reload credentials");
            println!("  ✗ Could not reload credentials: {e:#}");
        }
    }
}

fn start_search(kitchen: &mut Kitchen, finder: &RecipeFinder, in_flight: &mut InFlight) {
    match kitchen.begin_search() {
        Ok(pending) => {
            let ticket = pending.ticket;
            let finder = finder.clone();
            let handle = tokio::spawn(async move { finder.run(pending).await });
            *in_flight = Some((ticket, handle));
            println!("  {}", render::submit_label(kitchen));
        }
        Err(e) => println!("  ✗ {}", e.user_message()),
    }
}

/// Resolve when the in-flight search finishes; never resolves when idle.
async fn wait_for(in_flight: &mut InFlight) -> Result<Settled, JoinError> {
    match in_flight {
        Some((_, handle)) => handle.await,
        None => std::future::pending().await,
    }
}

fn settle(ticket: Ticket, joined: Result<Settled, JoinError>) -> Settled {
    joined.unwrap_or_else(|e| {
        error!(error = %e, "search task did not complete");
        Settled {
            ticket,
            outcome: Err(FindError::from(RequestError::Task(e.to_string()))),
            usage: None,
        }
    })
}

fn handle_login(db_path: &str, key: Option<&str>) -> anyhow::Result<()> {
    let key = match key {
        Some(key) => key.to_string(),
        None => {
            print!("Paste your Anthropic API key: ");
            io::stdout().flush()?;
            let mut key = String::new();
            io::stdin().read_line(&mut key)?;
            key
        }
    };

    auth::login(db_path, &key)?;
    println!("✓ API key saved to {db_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> RecipeFinder {
        let (finder, _) = build_finder(":memory:", DEFAULT_ENDPOINT).unwrap();
        finder.with_model("claude-haiku-4-5").with_max_tokens(256)
    }

    #[test]
    fn unreadable_credential_store_keeps_previous_finder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("rikucook.db");

        let mut finder = finder();
        let mut status = "API key ✓".to_string();
        refresh_credentials(
            &mut finder,
            &mut status,
            missing.to_str().unwrap(),
            DEFAULT_ENDPOINT,
            512,
        );

        assert_eq!(status, "API key ✓");
        assert_eq!(finder.model(), "claude-haiku-4-5");
        assert_eq!(finder.request_for(&["egg".to_string()]).max_tokens, 256);
    }

    #[test]
    fn refresh_keeps_model_and_reports_new_status() {
        let mut finder = finder();
        let mut status = "stale".to_string();
        refresh_credentials(&mut finder, &mut status, ":memory:", DEFAULT_ENDPOINT, 512);

        assert_ne!(status, "stale");
        assert_eq!(finder.model(), "claude-haiku-4-5");
        assert_eq!(finder.request_for(&["egg".to_string()]).max_tokens, 512);
    }
}
