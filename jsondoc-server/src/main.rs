//! jsondoc server binary
//!
//! Serves create/read/update/delete/list over JSON documents kept in memory.
use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use jsondoc::{memory::InMemoryStore, prelude::*};
use jsondoc_server::{api, config, logging};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "jsondoc-server", version, about = "In-memory JSON document service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config file and PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Load configuration before logging so the configured filter applies
    let (mut config, load_error) = match &args.config {
        Some(path) => match config::load_config(path) {
            Ok(config) => (config, None),
            Err(err) => (config::Config::default(), Some(err)),
        },
        None => (config::Config::default(), None),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    if let Some(port) = args.port {
        config.server.set_port(port);
    }

    logging::init_logging(&config.logging.filter)?;

    match (&args.config, load_error) {
        (Some(path), None) => tracing::info!("Loaded configuration from: {}", path.display()),
        (Some(path), Some(err)) => {
            tracing::warn!("Failed to load config from {}: {}. Using defaults.", path.display(), err)
        }
        (None, _) => tracing::info!("No config file specified, using defaults"),
    }

    let backend = InMemoryStore::builder()
        .capacity(config.storage.initial_capacity)
        .build()
        .await?;
    let service = Arc::new(DocumentService::new(backend));

    api::start_server(config.server.http_addr, Arc::clone(&service)).await?;

    match Arc::try_unwrap(service) {
        Ok(service) => service.shutdown().await?,
        Err(_) => tracing::warn!("document service still in use after server stopped"),
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
