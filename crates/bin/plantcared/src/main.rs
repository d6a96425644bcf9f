//! # plantcared — plant care daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Pick the storage backend and construct its port implementations
//! - Construct application services, injecting stores via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use plantcare_adapter_http_axum::state::AppState;
use plantcare_adapter_storage_memory::InMemoryStore;
use plantcare_adapter_storage_sqlite_sqlx::{
    SqliteEventStore, SqlitePlantRepository, SqliteUserRepository,
};
use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_app::services::event_service::EventService;
use plantcare_app::services::plant_service::PlantService;
use plantcare_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, data is lost on shutdown");
            let store = InMemoryStore::new();
            let state = AppState::new(
                UserService::new(store.clone()),
                PlantService::with_schedule(
                    store.clone(),
                    store.clone(),
                    config.care_schedule(),
                ),
                EventService::new(store.clone(), store),
            );
            serve(&config, state).await
        }
        StorageBackend::Sqlite => {
            let db = plantcare_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            tracing::info!(url = config.database_url(), "database ready");
            let pool = db.pool().clone();

            let state = AppState::new(
                UserService::new(SqliteUserRepository::new(pool.clone())),
                PlantService::with_schedule(
                    SqlitePlantRepository::new(pool.clone()),
                    SqliteEventStore::new(pool.clone()),
                    config.care_schedule(),
                ),
                EventService::new(
                    SqliteEventStore::new(pool.clone()),
                    SqlitePlantRepository::new(pool),
                ),
            );
            serve(&config, state).await
        }
    }
}

async fn serve<UR, PR, ES>(
    config: &Config,
    state: AppState<UR, PR, ES>,
) -> Result<(), Box<dyn std::error::Error>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let app = plantcare_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        backend = ?config.storage.backend,
        "plantcared listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("plantcared stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
