use anyhow::{Context, Result};
use dotenv::dotenv;
use mailrelay::{config::Config, handler::AppRouter, state::AppState, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("mailrelay");

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
