use std::future::Future;
use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{runtime, EntityStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already opened store.
pub fn build_app(store: Arc<EntityStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

/// Run until the process receives Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    run_until(cfg, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Open the store under `cfg.storage.data_dir`, bind, and serve until
/// `shutdown` resolves. Every collection is flushed once more on the way out.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime::ensure_env(&cfg.storage.data_dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let store = EntityStore::open(&cfg.storage.data_dir).await?;
    let app = build_app(Arc::clone(&store));

    let addr = cfg
        .server
        .bind_addr()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, data_dir = %cfg.storage.data_dir, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    store.persist_all().await?;
    info!("store flushed, server stopped");
    Ok(())
}
