use anyhow::{Context, anyhow};
use jako::api::{self, app_state::AppState};
use jako::config::loader::ConfigLoader;
use jako::observability::{
    HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use jako::services::create_resolver_service;
use jako::storage::{BlobStore, StorageFactory};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;
    init_tracing(&config.logging).map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    info!("Starting jako...");
    info!(backend = %config.storage.backend, "Configuration loaded successfully");

    let store = StorageFactory::create(&config.storage)?;
    info!("Storage initialized");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
    ));
    observability_state
        .add_health_check(probe_storage(store.as_ref()).await)
        .await;

    let resolver = create_resolver_service(store);
    let app_state = AppState::new(resolver, observability_state.metrics.clone());
    info!("Application state created");

    let api_router = api::create_router(app_state, observability_state.clone());
    let router = create_observability_router(observability_state).merge(api_router);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// 启动时探测存储后端
async fn probe_storage(store: &dyn BlobStore) -> HealthCheckResult {
    let start = Instant::now();
    let result = StorageFactory::health_check(store).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(healthy) => HealthCheckResult {
            name: format!("storage:{}", store.backend()),
            healthy,
            message: "reachable".to_string(),
            latency_ms,
        },
        Err(e) => {
            warn!(error = %e, "storage probe failed");
            HealthCheckResult {
                name: format!("storage:{}", store.backend()),
                healthy: false,
                message: e.to_string(),
                latency_ms,
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
