//! Wallet migration CLI - move a wallet from file storage to MySQL

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wallet_migrate_core::config::MigrationConfig;
use wallet_migrate_core::services::render_report;
use wallet_migrate_core::MigrationContext;

/// One-shot migration of a wallet to the MySQL storage backend
#[derive(Parser)]
#[command(name = "wallet-migrate", version, about, long_about = None)]
struct Cli {
    /// Path to config with wallet and database configuration
    #[arg(long, default_value = "config.yml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = MigrationConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    let ctx = MigrationContext::new(config);
    let export_path = ctx.migration_service.run(&ctx.config).await?;
    debug!(path = %export_path.display(), "export package left in place");

    print!("{}", render_report(&ctx.config)?);
    Ok(())
}
