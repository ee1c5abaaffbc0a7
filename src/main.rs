//! Binary entry point for the payroll engine HTTP service.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::store::InMemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| "./config/engine".to_string());
    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            info!(%err, "No engine configuration loaded; using defaults");
            ConfigLoader::default()
        }
    };
    let config = loader.config();

    let store = Arc::new(InMemoryStore::new());
    let state = AppState::in_memory(store, config.pay_rule_defaults().clone());
    let router = create_router(state);

    let bind_address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(%bind_address, "Payroll engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
