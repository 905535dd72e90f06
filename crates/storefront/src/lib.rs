//! OCM Catalog Storefront library.
//!
//! Read-only JSON API over the platform catalog plus static hosting for the
//! built single-page app. Exposed as a library so the router can be tested
//! without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
///
/// Unmatched paths are served from the static directory; anything not found
/// there falls back to `index.html` so the front-end router can handle it.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .merge(routes::routes())
        .fallback_service(spa)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
