//! Keeps one WebSocket endpoint connected and logs everything it sends
//!
//! Usage: `autosocket [URI]`. Without an argument the endpoint comes from
//! `AUTOSOCKET_URI` or the `uri` key of the config file.

use anyhow::Result;
use autosocket_console::autosocket::ConnectionManager;
use autosocket_console::bin_common::{load_config_from_env, parse_args, uri_argument};
use autosocket_console::config::AppConfig;
use autosocket_console::logging::init_tracing_with_level;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load config first (before logging is initialized)
    let config_path = load_config_from_env();
    let config = AppConfig::load(&config_path, uri_argument(&parse_args()))?;

    init_tracing_with_level(&config.log_level);
    config.log();

    print_banner("autosocket", &config.uri);

    let connection = ConnectionManager::builder()
        .reconnect_delay(config.reconnect_delay())
        .build()
        .setup_connection(config.uri.clone())?;

    connection.join().await?;

    info!("Connection manager stopped");
    Ok(())
}

fn print_banner(name: &str, uri: &str) {
    info!("");
    info!("========================================");
    info!("Starting {}", name);
    info!("Endpoint: {}", uri);
    info!("Press Ctrl+C to stop");
    info!("========================================");
    info!("");
}
