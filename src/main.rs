mod cli;
mod clipboard;
mod config;
mod poller;
mod server;
mod utils;

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::SystemClipboard;
use config::Config;
use poller::Poller;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Serve { port }) => {
            server::serve(port.unwrap_or(config.port)).await?;
        }
        Some(Commands::Poll { endpoint }) => {
            run_poller(endpoint.unwrap_or(config.endpoint)).await;
        }
        Some(Commands::Copy { text, endpoint }) => {
            handle_copy(text, endpoint.unwrap_or(config.endpoint)).await?;
        }
        None => {
            // No command - run the relay and the poller in one process
            let port = config.port;
            tokio::spawn(async move {
                if let Err(e) = server::serve(port).await {
                    error!(error = %e, "clipboard relay exited");
                }
            });
            run_poller(format!("http://127.0.0.1:{port}/clipboard/")).await;
        }
    }

    Ok(())
}

async fn run_poller(endpoint: String) {
    info!(endpoint = %endpoint, "starting clipboard poller");
    Poller::new(endpoint, Arc::new(SystemClipboard)).run().await;
}

async fn handle_copy(text: Option<String>, endpoint: String) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    reqwest::Client::new()
        .post(&endpoint)
        .body(text)
        .send()
        .await
        .context("Failed to reach clipboard relay")?
        .error_for_status()
        .context("Clipboard relay rejected the text")?;

    println!("✓ Sent to clipboard relay");

    Ok(())
}
