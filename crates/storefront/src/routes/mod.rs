//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                  - Health check
//!
//! # Catalog API
//! GET  /api/product?sku=                        - Product by SKU
//! GET  /api/products                            - Published products
//! GET  /api/products/category/{category_id}     - Products in a category
//! GET  /api/products/category-key/{category_key} - Category + its products
//! GET  /api/categories                          - All categories
//!
//! # Front-end
//! GET  /*                                       - Static files, else index.html
//! ```

pub mod api;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the application routes (without static file hosting).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api::routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the platform.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use ocm_catalog_admin::CommercetoolsConfig;
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;
    use crate::state::AppState;

    fn router() -> axum::Router {
        // Nothing here reaches the platform, so the hosts are never contacted.
        let commercetools = CommercetoolsConfig::new(
            "ocm",
            "client-id",
            "q8Zr2LkP0xVw7NbT4mYc",
            "http://127.0.0.1:9".parse().unwrap(),
            "http://127.0.0.1:9".parse().unwrap(),
        );
        let state = AppState::new(StorefrontConfig::new(commercetools, "dist")).unwrap();
        super::routes().with_state(state)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(get("/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_product_requires_sku() {
        let (status, body) = get("/api/product").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"SKU parameter is required"}"#);

        let (status, _) = get("/api/product?sku=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
