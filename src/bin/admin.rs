//! CLI administration tool for boto-shortener.
//!
//! Operates on the link table through the same service the HTTP API uses, so
//! uniqueness and transaction rules are identical.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a generated or custom code
//! cargo run --bin admin -- link create https://example.com
//! cargo run --bin admin -- link create https://example.com --code promo
//!
//! # Inspect, repoint and delete
//! cargo run --bin admin -- link show promo
//! cargo run --bin admin -- link update promo https://example.org
//! cargo run --bin admin -- link delete promo
//!
//! # List recent links
//! cargo run --bin admin -- link list --limit 20
//!
//! # Statistics and database checks
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (see [`boto_shortener::config`])
//! and refuses to run when it does not validate:
//!
//! - `DATABASE_URL` or `SHORTENER_DB_PATH`: database location
//! - `BASE_URL` (optional): used to print full short URLs
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, ...: pool tuning

use boto_shortener::config;
use boto_shortener::server::open_database;
use boto_shortener::state::{AppState, SqliteLinkService};
use boto_shortener::utils::code_generator::{is_generated_code, validate_custom_code};
use boto_shortener::utils::url_validator::check_http_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing boto-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Destination URL (http or https)
        url: String,

        /// Custom code (generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a short link
    Show {
        code: String,
    },

    /// Point a short link at a new URL
    Update {
        code: String,

        /// New destination URL (http or https)
        url: String,
    },

    /// Delete a short link
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List links, newest first
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = open_database(&config).await?;

    let state = AppState::new(Arc::new(pool.clone()), config.base_url.clone());

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &state).await?,
        Commands::Stats => handle_stats(&state.link_service).await?,
        Commands::Db { action } => {
            handle_db_action(action, &pool, &config.database_url).await?
        }
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create { url, code } => create_link(state, url, code).await,
        LinkAction::Show { code } => show_link(state, code).await,
        LinkAction::Update { code, url } => update_link(state, code, url).await,
        LinkAction::Delete { code, yes } => delete_link(state, code, yes).await,
        LinkAction::List { limit, offset } => list_links(state, limit, offset).await,
    }
}

/// Creates a short link, validating input the same way the HTTP API does.
async fn create_link(state: &AppState, url: String, code: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    check_http_url(&url).map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    let link = match code {
        Some(code) => {
            validate_custom_code(&code).map_err(|e| anyhow::anyhow!("Invalid code: {}", e))?;
            state.link_service.create_custom(&url, &code).await
        }
        None => state.link_service.create_auto(&url).await,
    }
    .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!("  Short URL: {}", state.short_url(&link.code).cyan());
    println!("  Target:    {}", link.original_url);
    println!();

    Ok(())
}

/// Prints a single link.
async fn show_link(state: &AppState, code: String) -> Result<()> {
    let link = state
        .link_service
        .find(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    let origin = if is_generated_code(&link.code) {
        "generated".bright_black()
    } else {
        "custom".magenta()
    };

    println!("{}", "🔎 Short Link".bright_blue().bold());
    println!();
    println!("  Code:      {} ({})", link.code.bright_yellow().bold(), origin);
    println!("  Short URL: {}", state.short_url(&link.code).cyan());
    println!("  Target:    {}", link.original_url);
    println!(
        "  Created:   {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}

/// Repoints an existing link.
async fn update_link(state: &AppState, code: String, url: String) -> Result<()> {
    check_http_url(&url).map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    let updated = state
        .link_service
        .update(&code, &url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update link: {}", e))?;

    if !updated {
        anyhow::bail!("Link not found");
    }

    println!("{}", "✅ Link updated successfully!".green().bold());
    println!("  {} → {}", code.bright_yellow(), url);
    println!();

    Ok(())
}

/// Deletes a link with a confirmation prompt.
async fn delete_link(state: &AppState, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Short Link".bright_blue().bold());
    println!();

    let link = state
        .link_service
        .find(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.original_url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = state
        .link_service
        .delete(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "✅ Link deleted successfully!".green().bold());
    } else {
        println!("{}", "⚠️  Link was already removed".yellow());
    }
    println!();

    Ok(())
}

/// Lists links in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   Code         Created              Target
///   ──────────────────────────────────────────────────────────────
///   aB3dE5gH     2025-01-15 10:30     https://example.com
/// ```
async fn list_links(state: &AppState, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list(limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<20} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<12} {:<20} {}",
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(link_service: &SqliteLinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = link_service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    pool: &SqlitePool,
    database_url: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:       {}", version.bright_white());
            println!("  Journal mode: {}", journal_mode.bright_white());
            println!("  Location:     {}", database_url.bright_white());
            println!();
        }
    }

    Ok(())
}
