use access_gate::adapters::http;
use access_gate::core::ConfigProvider;
use access_gate::utils::{logger, shutdown::shutdown_signal, validation::Validate};
use access_gate::{AccessGate, CliConfig};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting access-gate");

    let config = match cli.into_server_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {} ({:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.access_code().is_none() {
        tracing::warn!("DEMO_ACCESS_CODE is not set, using the built-in default code");
    }

    let gate = Arc::new(AccessGate::from_config(&config));
    let app = http::router(gate);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let shutdown = shutdown_signal()?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
