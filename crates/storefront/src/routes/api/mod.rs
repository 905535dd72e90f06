//! Read-only JSON API over the platform catalog.
//!
//! Every endpoint is a single pass-through call; the response bodies are the
//! platform's own projections.

pub mod categories;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the `/api` router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", get(products::by_sku))
        .route("/products", get(products::published))
        .route("/products/category/{category_id}", get(products::by_category))
        .route(
            "/products/category-key/{category_key}",
            get(products::by_category_key),
        )
        .route("/categories", get(categories::index))
}
