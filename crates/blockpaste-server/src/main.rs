use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use blockpaste_core::cipher;
use blockpaste_server::{router, server, telemetry, AppState, Config, PasteService};
use blockpaste_store::{BlockStore, MemoryBlockStore, PasteStore, SqliteBlockStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init_tracing(config.json_logs);

    cipher::assert_entropy().context("failed to assert a safe source of system entropy")?;

    let backend: Arc<dyn BlockStore> = match &config.database {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening SQLite block store");
            Arc::new(
                SqliteBlockStore::open(path)
                    .with_context(|| format!("cannot open block store at {}", path.display()))?,
            )
        }
        None => {
            tracing::warn!("no --database given, pastes are kept in memory only");
            Arc::new(MemoryBlockStore::new())
        }
    };

    let store = PasteStore::with_config(backend, config.store_config());
    let service = PasteService::new(store, config.service_config());
    let state = AppState::with_request_timeout(
        service,
        &config.public_hostname(),
        config.request_timeout(),
    );

    server::start_server(&config, router(state)).await
}
