//! CLI administration tool for slink.
//!
//! Shortens and resolves links and inspects storage without going through
//! the HTTP API. Uses the same environment configuration as the server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a link (PostgreSQL only)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Resolve a code (PostgreSQL only)
//! cargo run --bin admin -- lookup 100680
//!
//! # View statistics (PostgreSQL only)
//! cargo run --bin admin -- stats
//!
//! # Check storage connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` / `STORAGE_BACKEND`: storage selection, see `slink::config`
//! - `CODE_LENGTH`, `SALT`, `MAX_ATTEMPTS`: shortener parameters

use slink::config::{self, Config, StorageBackend};
use slink::infrastructure::persistence::pg_pool;
use slink::server::build_link_service;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing slink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a link and print its code
    Shorten {
        /// The link to shorten
        link: String,
    },

    /// Resolve a short code to its link
    Lookup {
        /// The short code
        code: String,
    },

    /// Show statistics
    Stats,

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Storage operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Shorten { link } => shorten(&config, link).await?,
        Commands::Lookup { code } => {
            if !lookup(&config, code).await? {
                std::process::exit(1);
            }
        }
        Commands::Stats => handle_stats(&config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Fails unless `config` selects storage that outlives this process.
fn require_persistent_storage(config: &Config) -> Result<()> {
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!(
            "The '{}' backend does not persist between admin invocations; \
             set DATABASE_URL or STORAGE_BACKEND=postgres",
            config.storage_backend
        );
    }
    Ok(())
}

/// Shortens a link through the configured storage.
async fn shorten(config: &Config, link: String) -> Result<()> {
    require_persistent_storage(config)?;
    let (service, _) = build_link_service(config).await?;

    let code = service
        .shorten(&link)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten link: {}", e))?;

    println!("{}", "✅ Short link created".green().bold());
    println!();
    println!("  Link:  {}", link.cyan());
    println!("  Code:  {}", code.bright_white().bold());
    println!(
        "  URL:   {}",
        service.short_url(&config.base_url, &code).bright_cyan()
    );
    println!();

    Ok(())
}

/// Resolves a code; returns `false` when it is unknown.
async fn lookup(config: &Config, code: String) -> Result<bool> {
    require_persistent_storage(config)?;
    let (service, _) = build_link_service(config).await?;

    let link = service
        .lookup(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Storage error: {}", e))?;

    match link {
        Some(link) => {
            println!("  {} → {}", code.bright_white().bold(), link.cyan());
            Ok(true)
        }
        None => {
            println!("{}", format!("❌ Unknown code: {}", code).red());
            Ok(false)
        }
    }
}

/// Displays the number of stored links.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    if config.storage_backend != StorageBackend::Postgres {
        println!(
            "{}",
            "  In-memory storage has no persistent statistics".yellow()
        );
        return Ok(());
    }

    let pool = pg_pool::connect(config).await?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Code length: {}, salt: {:?}",
        config.code_length, config.salt
    );
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "🔌 Checking storage:".bright_blue().bold(),
                config.storage_backend
            );

            let (_, repository) = build_link_service(config).await?;

            if repository.health_check().await {
                println!("{}", "✅ Storage reachable".green().bold());
            } else {
                println!("{}", "❌ Storage unreachable".red().bold());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
