//! Signal Webhook Server
//!
//! Receives TradingView alerts on `POST /api/webhook/tradingview`, validates
//! them and acknowledges receipt. Also serves `/health` and `/metrics`.

use dotenvy::dotenv;
use signal_webhook::config::{get_environment, ServerConfig};
use signal_webhook::core::http::start_server;
use signal_webhook::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ServerConfig::from_env();
    let env = get_environment();
    info!("Starting Signal Webhook Server");
    info!(environment = %env, "Environment");
    info!(
        port = config.port,
        body_limit_bytes = config.body_limit_bytes,
        "HTTP Server: http://{}",
        config.bind_address()
    );

    if let Err(e) = start_server(config, shutdown_signal()).await {
        error!(error = %e, "HTTP server error");
        return Err(e);
    }

    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down webhook server...");
}
