//! Server settings loaded from config.toml
//!
//! Every setting has a default, so the file is optional. Only a file that
//! exists but cannot be parsed is an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP server and session settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server and session settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Lifetime of a session created without "Remember Me"
    pub session_hours: i64,
    /// Lifetime of a session (and its cookie) created with "Remember Me"
    pub remember_days: i64,
    /// Sets the `Secure` attribute on cookies; enable behind HTTPS
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            session_hours: 24,
            remember_days: 365,
            secure_cookies: false,
        }
    }
}

/// Longest allowed session without "Remember Me" (one year).
pub const MAX_SESSION_HOURS: i64 = 24 * 365;
/// Longest allowed "Remember Me" session (ten years).
pub const MAX_REMEMBER_DAYS: i64 = 365 * 10;

/// Parses configuration from a TOML string.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if !(1..=MAX_SESSION_HOURS).contains(&config.server.session_hours) {
        return Err(Error::Config {
            message: format!("session_hours must be between 1 and {MAX_SESSION_HOURS}"),
        });
    }
    if !(1..=MAX_REMEMBER_DAYS).contains(&config.server.remember_days) {
        return Err(Error::Config {
            message: format!("remember_days must be between 1 and {MAX_REMEMBER_DAYS}"),
        });
    }

    Ok(config)
}

/// Loads configuration from a TOML file, falling back to defaults when the file is absent.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    tracing::debug!("Loading configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads configuration from the default location (./config.toml) and applies
/// the `BIND_ADDRESS` environment override.
pub fn load_default_config() -> Result<Config> {
    let mut config = load_config("config.toml")?;
    if let Ok(bind_address) = std::env::var("BIND_ADDRESS") {
        config.server.bind_address = bind_address;
    }
    Ok(config)
}
