//! Catalog server binary
//!
//! Configuration is read from the YAML file named by `PLAYSTORE_CONFIG`
//! (optional) and `PLAYSTORE_*` environment variables.

use playstore::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = match &config.data_path {
        Some(path) => InMemoryAppStore::from_json_file(path)?,
        None => InMemoryAppStore::bundled()?,
    };

    tracing::info!(
        apps = store.len(),
        source = config.data_path.as_deref().unwrap_or("bundled"),
        precedence = ?config.filter_precedence,
        "catalog loaded"
    );

    let addr = config.bind_address.clone();

    ServerBuilder::new()
        .with_config(config)
        .with_store(store)
        .serve(&addr)
        .await
}
