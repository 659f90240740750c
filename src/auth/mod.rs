pub mod storage;

pub use storage::AuthStorage;

use anyhow::{Context, Result, bail};
use storage::KeySource;

use crate::consts::PROVIDER;

/// Store an API key for the provider.
///
/// This is the shared logic used by both the CLI `rikucook login`
/// subcommand and the `/login` REPL slash command.
pub fn login(db_path: &str, api_key: &str) -> Result<()> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("no API key provided");
    }
    let storage = AuthStorage::open(db_path).context("failed to open auth storage")?;
    storage
        .set(PROVIDER, api_key)
        .context("failed to save credentials")?;
    Ok(())
}

/// Remove the stored API key.
///
/// This is the shared logic used by both the CLI `rikucook logout`
/// subcommand and the `/logout` REPL slash command.
pub fn logout(db_path: &str) -> Result<()> {
    let storage = AuthStorage::open(db_path).context("failed to open auth storage")?;
    storage
        .remove(PROVIDER)
        .context("failed to remove credentials")?;
    Ok(())
}

/// Human-readable auth status for the banner and `/whoami`.
pub fn status_label(source: Option<KeySource>) -> &'static str {
    match source {
        Some(KeySource::Stored) => "API key ✓",
        Some(KeySource::Env) => "API key (env) ✓",
        None => "not authenticated",
    }
}
