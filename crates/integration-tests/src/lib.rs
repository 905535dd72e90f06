//! Integration tests for OCM Catalog.
//!
//! Every test starts a `wiremock` server that plays both the auth host and
//! the API host, so no platform credentials or network access are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ocm-catalog-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `client` - Token flow, request shape, error classification
//! - `materialize` - Category hierarchy creation against the mock API
//! - `storefront` - JSON API routes and front-end fallback

use ocm_catalog_admin::{CommercetoolsClient, CommercetoolsConfig};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Project key used by all tests.
pub const PROJECT_KEY: &str = "ocm";

/// Bearer token issued by [`mount_token`].
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Configuration pointing both hosts at `server`.
///
/// # Panics
///
/// Panics if the mock server URI is not a valid URL.
#[must_use]
pub fn config_for(server: &MockServer) -> CommercetoolsConfig {
    let base: url::Url = server.uri().parse().expect("mock server URI");
    CommercetoolsConfig::new(
        PROJECT_KEY,
        "integration-client",
        "m4Qx8Rt2Vb7Nz1Kp5Lw9",
        base.clone(),
        base,
    )
}

/// Client talking to `server`.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn client_for(server: &MockServer) -> CommercetoolsClient {
    CommercetoolsClient::new(config_for(server)).expect("client")
}

/// Mount a token endpoint issuing [`ACCESS_TOKEN`] valid for 48 hours.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 172_800,
            "scope": format!("manage_project:{PROJECT_KEY}")
        })))
        .mount(server)
        .await;
}

/// Path of a project-scoped resource, e.g. `/ocm/categories`.
#[must_use]
pub fn api_path(resource: &str) -> String {
    format!("/{PROJECT_KEY}/{resource}")
}

/// Category resource as the platform returns it.
#[must_use]
pub fn category_json(id: &str, key: &str, parent_id: Option<&str>) -> Value {
    let mut category = json!({
        "id": id,
        "version": 1,
        "key": key,
        "name": { "en": key },
        "slug": { "en": key },
        "ancestors": []
    });
    if let Some(parent_id) = parent_id {
        category["parent"] = json!({ "typeId": "category", "id": parent_id });
    }
    category
}

/// Published product projection with a single master variant.
#[must_use]
pub fn product_projection_json(id: &str, key: &str, sku: &str) -> Value {
    json!({
        "id": id,
        "version": 3,
        "key": key,
        "name": { "en": format!("{key} - Women's") },
        "slug": { "en": key },
        "categories": [],
        "masterVariant": {
            "id": 1,
            "sku": sku,
            "attributes": [{ "name": "brand-name", "value": "Essentials" }]
        },
        "variants": []
    })
}

/// Paged query envelope around `results`.
#[must_use]
pub fn paged(results: Vec<Value>) -> Value {
    let count = results.len();
    json!({
        "limit": 100,
        "offset": 0,
        "count": count,
        "total": count,
        "results": results
    })
}

/// Platform error body with a single error code.
#[must_use]
pub fn api_error(status: u16, code: &str, message: &str) -> Value {
    json!({
        "statusCode": status,
        "message": message,
        "errors": [{ "code": code, "message": message }]
    })
}
