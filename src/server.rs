//! Local preview server
//!
//! Exposes the captured image and the static editor page over HTTP for the
//! lifetime of the process. Three routes only: `/` serves the editor page,
//! `/static/*` the editor's assets, and `/image` the captured file. All
//! handlers are stateless file reads, so axum's per-connection concurrency
//! needs no coordination here.
//!
//! Binding is split from serving so that a bind failure (port already in
//! use) surfaces as a [`ShotclipError::ListenerBind`] before the blocking
//! serve loop starts, and so tests can bind an ephemeral port first.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::error::{ShotResult, ShotclipError};

/// Builds the three-route preview router
pub fn build_router(image_path: &Path, static_dir: &Path, editor_page: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(editor_page))
        .route_service("/image", ServeFile::new(image_path))
        .nest_service("/static", ServeDir::new(static_dir))
}

/// Binds the preview listener
///
/// # Errors
///
/// [`ShotclipError::ListenerBind`] if the address cannot be bound, e.g. the
/// port is already occupied. There is no fallback to another port.
pub async fn bind(addr: SocketAddr) -> ShotResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ShotclipError::ListenerBind { addr, source })
}

/// Serves the router on the bound listener until the process is terminated
pub async fn serve(listener: TcpListener, router: Router) -> ShotResult<()> {
    let addr = listener.local_addr()?;
    info!("Opening editor at http://{addr}");

    axum::serve(listener, router).await?;
    Ok(())
}
