use anyhow::Result;
use saarthi_rust::{config, server};
use tracing::info;

/// Parses a level or a full `RUST_LOG` directive list
fn build_env_filter(level: &str) -> Result<tracing_subscriber::EnvFilter> {
    level.parse::<tracing_subscriber::EnvFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log filter: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup). A missing credential stops us here.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match build_env_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting Saarthi chat gateway with log level: {}", log_level);
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
