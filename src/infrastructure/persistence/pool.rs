//! SQLite connection pool and embedded schema migrations.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Schema migrations embedded from `./migrations` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Tuning knobs for the connection pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Opens a pool for `database_url`, creating the database file (and its parent
/// directories) when missing.
///
/// Connections use WAL journaling and a 5 second busy timeout so concurrent
/// writers wait on the engine's lock instead of failing immediately.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, the directory cannot be
/// created, or the first connection fails.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    ensure_parent_dir(options.get_filename())?;

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(options)
        .await
}

fn ensure_parent_dir(filename: &Path) -> Result<(), sqlx::Error> {
    match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)?;
            tracing::info!(path = %parent.display(), "Created database directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
