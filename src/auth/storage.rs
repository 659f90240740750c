use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;

/// Manages API key storage in SQLite.
///
/// Shares a database with [`Config`](crate::config::Config); pass the same
/// path to both.
pub struct AuthStorage {
    conn: Mutex<Connection>,
}

impl AuthStorage {
    /// Open or create the credentials table in the given database path.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open credentials database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS credentials (
                provider TEXT PRIMARY KEY,
                api_key  TEXT NOT NULL
            )",
        )
        .context("failed to create credentials table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("credentials connection poisoned"))
    }

    /// Get the stored key for a provider.
    pub fn get(&self, provider: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT api_key FROM credentials WHERE provider = ?1")?;
        let mut rows = stmt.query([provider])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Store a key for a provider (upsert).
    pub fn set(&self, provider: &str, api_key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO credentials (provider, api_key) VALUES (?1, ?2)
             ON CONFLICT(provider) DO UPDATE SET api_key = excluded.api_key",
            [provider, api_key],
        )?;
        Ok(())
    }

    /// Remove the key for a provider.
    pub fn remove(&self, provider: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM credentials WHERE provider = ?1", [provider])?;
        Ok(())
    }

    /// Resolve the key to send. Priority: stored key → environment variable.
    pub fn resolve(&self, provider: &str, env_var: &str) -> Result<Option<ResolvedKey>> {
        if let Some(key) = self.get(provider)? {
            return Ok(Some(ResolvedKey {
                key,
                source: KeySource::Stored,
            }));
        }

        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Ok(Some(ResolvedKey {
                key,
                source: KeySource::Env,
            }));
        }

        Ok(None)
    }
}

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Stored,
    Env,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}
