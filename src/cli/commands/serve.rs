use std::sync::Arc;

use anyhow::Context;

use crate::app::{app, AppState};
use crate::config::{AppConfig, StoreBackend};
use crate::database::{DatabaseManager, MemoryStore, PgStore, Store};

pub async fn handle(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    tracing::info!("Starting Admin Dashboard API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every session will be rejected");
    }

    let (store, manager): (Arc<dyn Store>, Option<DatabaseManager>) = match config.store {
        StoreBackend::Postgres => {
            let manager = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                manager.migrate().await.context("failed to apply migrations")?;
            }
            let store: Arc<dyn Store> = Arc::new(PgStore::new(&manager));
            (store, Some(manager))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
            (store, None)
        }
    };

    let port = port.unwrap_or(config.api.port);
    let router = app(AppState::new(store, config));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Admin Dashboard API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(manager) = manager {
        manager.close().await;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
