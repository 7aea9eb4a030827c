//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path of the SQLite database file
    pub database_path: String,
    /// Answer 404 when an update or delete matches no row
    pub strict_writes: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `DATABASE_PATH` - SQLite database file (default: items.db)
    /// - `STRICT_WRITES` - `true`/`1` to reject writes that match no row (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            database_path: env::var("DATABASE_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.database_path),
            strict_writes: env::var("STRICT_WRITES")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.strict_writes),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_path: "items.db".to_string(),
            strict_writes: false,
        }
    }
}
