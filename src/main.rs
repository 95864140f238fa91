//! Ledig CLI entry point.

use anyhow::Result;
use clap::Parser;
use ledig::cli::{commands, Cli, Commands};
use ledig::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("ledig={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Slots { date } => {
            commands::run_slots(date.as_deref(), settings)?;
        }

        Commands::Book {
            date,
            start_time,
            end_time,
            reservation_name,
        } => {
            commands::run_book(date, start_time, end_time, reservation_name, settings)?;
        }

        Commands::Ask {
            question,
            date,
            model,
        } => {
            commands::run_ask(question, date.clone(), model.clone(), settings).await?;
        }

        Commands::Chat { model } => {
            commands::run_chat(model.clone(), settings).await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host, *port, settings).await?;
        }

        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
