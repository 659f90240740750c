//! Preferences that outlive a session, stored in SQLite.
//!
//! Shares a database with [`AuthStorage`](crate::auth::AuthStorage); pass
//! the same path to both.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension};
use std::sync::Mutex;

const MODEL_KEY: &str = "model";

pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table. Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// The model chosen with `/model`, if any.
    pub fn model(&self) -> Result<Option<String>> {
        let conn = self.conn.lock().map_err(|_| anyhow!("config connection poisoned"))?;
        conn.query_row(
            "SELECT value FROM config WHERE key = ?1",
            [MODEL_KEY],
            |row| row.get(0),
        )
        .optional()
        .context("failed to read saved model")
    }

    pub fn set_model(&self, model: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| anyhow!("config connection poisoned"))?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [MODEL_KEY, model],
        )
        .context("failed to save model")?;
        Ok(())
    }
}
