use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{AlertBoard, HttpRemoteStore, SyncController};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;
mod terminal;

use config::{load_settings, validate_api_url};
use terminal::TerminalView;

#[derive(Parser, Debug)]
#[command(about = "Keep a remote todo collection in sync from the terminal")]
struct Args {
    /// Collection endpoint; overrides the config file and environment.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long, default_value = "todo.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let api_url = validate_api_url(&settings.api_url)?;
    info!(%api_url, "using todo collection");

    let store = HttpRemoteStore::new(&api_url)
        .with_context(|| format!("failed to build client for '{api_url}'"))?;
    let terminal = Arc::new(TerminalView::new(
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    ));
    let alerts = Arc::new(AlertBoard::new(settings.alert_duration()));
    let controller = SyncController::new(
        Arc::new(store),
        terminal.clone(),
        alerts.clone(),
        terminal.clone(),
    );

    session::run_session(&controller, &*terminal, &alerts).await
}
