//! HTTP service answering `GET /` with a fixed JSON greeting.
//!
//! Everything other than `GET /` (and the implied `HEAD /`) falls through to
//! axum's defaults: `404` for unknown paths, `405` for other methods on `/`.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use error::{Result, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::greet))
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on `addr` (`"host:port"`).
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
