//! TRON Energy Bot database tool - Main executable
//!
//! Applies and reverts the schema migrations of the order tables and runs the
//! background service that expires unpaid TRX exchange orders.
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use tron_energy_db::cli::{Cli, Command};
use tron_energy_db::migrations;
use tron_energy_db::services::ExpiryService;
use tron_energy_db::Settings;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Command::History { json } => print_history(json)?,
        Command::Upgrade { to } => {
            let (pool, _) = connect(Some(1)).await?;
            let mut conn = pool.acquire().await?;

            info!("Running database migrations...");
            if let Err(e) = migrations::upgrade::<sqlx::Postgres>(&mut *conn, to.as_deref()).await
            {
                error!("Failed to run migrations: {}", e);
                return Err(anyhow::Error::from(e));
            }
            info!("Migrations completed successfully");
        }
        Command::Downgrade(args) => {
            let (pool, _) = connect(Some(1)).await?;
            let mut conn = pool.acquire().await?;

            info!("Reverting database migrations...");
            if let Err(e) =
                migrations::downgrade::<sqlx::Postgres>(&mut *conn, &args.target()).await
            {
                error!("Failed to revert migrations: {}", e);
                return Err(anyhow::Error::from(e));
            }
            info!("Downgrade completed successfully");
        }
        Command::Current => {
            let (pool, _) = connect(Some(1)).await?;
            let mut conn = pool.acquire().await?;

            let applied = migrations::applied::<sqlx::Postgres>(&mut *conn).await?;
            if applied.is_empty() {
                println!("No revisions applied");
            }
            for name in &applied {
                println!("{}", name);
            }
        }
        Command::Sweep => {
            let (pool, _) = connect(Some(1)).await?;

            let expired = ExpiryService::sweep(&pool).await?;
            println!("Expired {} orders", expired);
        }
        Command::Serve => {
            let (pool, settings) = connect(None).await?;
            let mut expiry_service =
                ExpiryService::new(Arc::new(pool), settings.expiry_sweep_interval());

            info!("Starting expiry background service...");
            expiry_service.start().await?;

            info!("Service is running! Press Ctrl+C to stop.");
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl+C")?;

            info!("Stopping expiry service...");
            expiry_service.stop().await;
        }
    }

    Ok(())
}

/// Load settings and open a pool, sized by settings unless `max_connections` is given
async fn connect(max_connections: Option<u32>) -> anyhow::Result<(PgPool, Settings)> {
    let settings =
        Settings::from_env().context("DATABASE_URL must be set in environment variables")?;

    info!(
        "Starting TRON Energy Bot database tool v{}",
        tron_energy_db::VERSION
    );
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.unwrap_or(settings.database_max_connections))
        .connect(&settings.database_url)
        .await
        .context("Failed to create database connection pool")?;

    Ok((pool, settings))
}

fn print_history(json: bool) -> anyhow::Result<()> {
    let history = migrations::history();

    if json {
        println!("{}", serde_json::to_string_pretty(history)?);
        return Ok(());
    }

    for revision in history {
        println!(
            "{} -> {}: {}",
            revision.parent.unwrap_or("<base>"),
            revision.name,
            revision.summary
        );
    }
    Ok(())
}
