//! neorest CLI - command-line client for a graph database's REST API.

use clap::Parser;
use neorest_cli::commands;
use neorest_cli::{Cli, Command, Config, Formatter};
use neorest_sdk::Database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> neorest_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config: explicit file, else the default path (created on first run)
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_create()?,
    };

    if let Some(url) = cli.url {
        config.connection.url = url;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    tracing::debug!(url = %config.connection.url, "Connecting");
    let db = Database::connect(&config.connection).await?;

    match cli.command {
        Command::Relationship(args) => commands::execute_relationship(args, &db, &formatter).await?,
        Command::Types => commands::execute_types(&db, &formatter).await?,
        Command::Node(args) => commands::execute_node(args, &db, &formatter).await?,
        Command::Properties(args) => commands::execute_properties(args, &db, &formatter).await?,
        Command::Info => commands::execute_info(&db, &formatter).await?,
    }

    Ok(())
}
