//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly to the server. Nothing reads the environment afterwards.
//!
//! ## Storage location
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/shortener.db"
//! # or, when DATABASE_URL is unset:
//! export SHORTENER_DB_PATH="data/shortener.db"
//! ```
//!
//! `DATABASE_URL` wins when both are set. Without either, `shortener.db` in
//! the working directory is used.
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Public base address for short URLs (relative `/{code}` if unset)
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is unset (default: `8000`)
//! - `RUST_LOG` / `LOG_LEVEL` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - Pool tuning

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::PoolSettings;

const DEFAULT_DB_PATH: &str = "shortener.db";
const DEFAULT_PORT: u16 = 8000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base address used to render full short URLs.
    pub base_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url = load_database_url();

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.trim().is_empty());

        let listen_addr = match env::var("LISTEN") {
            Ok(addr) => addr,
            Err(_) => {
                let port = match env::var("PORT") {
                    Ok(port) => port
                        .parse::<u16>()
                        .with_context(|| format!("PORT must be a port number, got '{}'", port))?,
                    Err(_) => DEFAULT_PORT,
                };
                format!("0.0.0.0:{}", port)
            }
        };

        let log_level = env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_connect_timeout: env_or("DB_CONNECT_TIMEOUT", 30),
            db_idle_timeout: env_or("DB_IDLE_TIMEOUT", 600),
            db_max_lifetime: env_or("DB_MAX_LIFETIME", 1800),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - pool size or acquire timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if let Some(ref base_url) = self.base_url {
            let parsed = url::Url::parse(base_url)
                .with_context(|| format!("BASE_URL is not a valid URL: '{}'", base_url))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "BASE_URL must start with 'http://' or 'https://', got '{}'",
                    base_url
                );
            }
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Pool tuning derived from the `DB_*` variables.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
            idle_timeout: Duration::from_secs(self.db_idle_timeout),
            max_lifetime: Duration::from_secs(self.db_max_lifetime),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: not set (relative short URLs)"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DB max connections: {}", self.db_max_connections);
    }
}

/// Resolves the database URL.
///
/// Priority:
/// 1. `DATABASE_URL` environment variable
/// 2. `sqlite://` + `SHORTENER_DB_PATH`
/// 3. `sqlite://shortener.db`
pub fn load_database_url() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    let path = env::var("SHORTENER_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    format!("sqlite://{}", path)
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
