//! HTTP API server: an axum router over the shared event log store.

pub mod error;
pub mod routes;

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state: one SQLite connection behind an async lock, plus
/// the subject all HTTP requests are pinned to.
///
/// The single locked connection is the serialization point for the
/// read-validate-append sequence; submissions additionally run inside an
/// immediate transaction so out-of-process writers are ordered too.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<Mutex<DbPool>>,
    pub subject: String,
}

impl AppState {
    pub fn new(pool: DbPool, subject: impl Into<String>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(pool)),
            subject: subject.into(),
        }
    }
}

/// Build the application router with CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is terminated.
pub async fn serve(state: AppState, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "clocklog listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
