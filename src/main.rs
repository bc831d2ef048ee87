//! Gratuity service binary.
//!
//! Reads the configuration named by `GRATUITY_CONFIG` (default
//! `config/gratuity.yaml`), opens the employee store and serves the API.

use gratuity_engine::api::{AppState, create_router};
use gratuity_engine::config::{AppConfig, ConfigLoader};
use gratuity_engine::store::open_store;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "config/gratuity.yaml";

fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let path = std::env::var("GRATUITY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut config = ConfigLoader::load(&path)?.into_config();

    if let Ok(port) = std::env::var("GRATUITY_PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| format!("invalid GRATUITY_PORT '{}': {}", port, e))?;
    }

    Ok(config)
}

fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config)?;

    let store = open_store(&config.storage).await?;
    let router = create_router(AppState::new(store));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        backend = ?config.storage.backend,
        "Gratuity service listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gratuity service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
