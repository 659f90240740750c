//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Anthropic model when none is specified or configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Completion endpoint used unless `--endpoint` overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Output budget for a single recipe request.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Provider key used for credential storage.
pub const PROVIDER: &str = "anthropic";

/// Environment variable consulted when no key is stored.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Shown when a search is started with an empty ingredient list.
pub const NO_INGREDIENTS_MESSAGE: &str = "Please add at least one ingredient";

/// Shown for every transport or parse failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate recipes. Please try again.";

/// Default database path: `~/.rikucook/rikucook.db`.
/// Single DB for credentials and config.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".rikucook")
        .join("rikucook.db")
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
