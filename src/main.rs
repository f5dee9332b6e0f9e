//! Contact Book - Main entry point
//!
//! Loads the saved contact book, runs the interactive console on
//! stdin/stdout and saves on exit.

use anyhow::Result;
use contact_book::repositories::RecordRepository;
use contact_book::{shell, CommandRouter, Config, ConsoleRenderer, JsonFileRepository};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so the console conversation stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book with data file: {}",
        config.book_file.display()
    );

    let repository = JsonFileRepository::new(&config.book_file);
    let directory = match repository.load().await {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load contact book: {}", e);
            return Err(e.into());
        }
    };
    info!("Loaded {} records", directory.len());

    let mut router = CommandRouter::new(
        directory,
        Box::new(ConsoleRenderer),
        config.birthday_window_days,
    );

    let stdin = BufReader::new(tokio::io::stdin());
    shell::run(stdin, tokio::io::stdout(), &mut router, &repository).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
