//! Player registry server backed by the in-memory store
//!
//! Configuration is read from the YAML file named by `PLAYERS_CONFIG` (if
//! set), then `PLAYERS_HOST`, `PLAYERS_PORT`, `PLAYERS_BASE_PATH` and
//! `PLAYERS_LOG` override individual values. `RUST_LOG` takes precedence
//! over the configured log filter.

use anyhow::Result;
use players::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var("PLAYERS_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    }
    .with_env_overrides()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_store(InMemoryPlayerStore::new())
        .with_config(config)
        .serve()
        .await
}
