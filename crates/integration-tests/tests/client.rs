//! Platform client against a mock auth and API host.

#![allow(clippy::unwrap_used)]

use ocm_catalog_admin::{CommerceError, ErrorKind};
use ocm_catalog_core::{CategoryId, CategoryNode};
use ocm_catalog_integration_tests::{
    ACCESS_TOKEN, api_error, api_path, category_json, client_for, mount_token, paged,
    product_projection_json,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_is_requested_once_and_reused() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("scope=manage_project%3Aocm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "expires_in": 172_800,
            "scope": "manage_project:ocm"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("categories")))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![
            category_json("c-1", "women", None),
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_categories(500).await.unwrap().len(), 1);
    assert_eq!(client.get_categories(500).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_token_rejected_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "message": "Please provide valid client credentials.",
            "error": "invalid_client"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_categories(10).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Auth);
    assert!(matches!(err, CommerceError::AuthenticationFailed(ref msg) if msg.contains("401")));
}

#[tokio::test]
async fn test_create_category_sends_parent_reference() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .and(body_partial_json(json!({
            "key": "women-tops",
            "name": { "en": "Tops" },
            "slug": { "en": "women-tops" },
            "parent": { "typeId": "category", "id": "c-clothing" }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(category_json(
                "c-tops",
                "women-tops",
                Some("c-clothing"),
            )),
        )
        .expect(1)
        .mount(&server)
        .await;

    let node = CategoryNode::new("women-tops", "Tops", "women-tops");
    let parent = CategoryId::new("c-clothing");
    let created = client_for(&server)
        .create_category(&node.to_draft(Some(&parent)))
        .await
        .unwrap();

    assert_eq!(created.id.as_str(), "c-tops");
    assert_eq!(created.parent_id(), Some(parent));
}

#[tokio::test]
async fn test_duplicate_key_is_conflict() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error(
            400,
            "DuplicateField",
            "A duplicate value '\"women\"' exists for field 'key'.",
        )))
        .mount(&server)
        .await;

    let node = CategoryNode::new("women", "Women", "women");
    let err = client_for(&server)
        .create_category(&node.to_draft(None))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(matches!(err, CommerceError::Api { status: 400, .. }));
    assert!(err.to_string().contains("DuplicateField"));
}

#[tokio::test]
async fn test_missing_required_field_is_validation() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error(
            400,
            "InvalidJsonInput",
            "Request body does not contain valid JSON.",
        )))
        .mount(&server)
        .await;

    let node = CategoryNode::new("women", "Women", "women");
    let err = client_for(&server)
        .create_category(&node.to_draft(None))
        .await
        .unwrap_err();

    assert!(err.is_validation());
}

#[tokio::test]
async fn test_server_error_is_transient() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_categories(10).await.unwrap_err();

    assert!(err.is_transient());
    assert!(matches!(err, CommerceError::Api { status: 503, ref message, .. } if message == "upstream unavailable"));
}

#[tokio::test]
async fn test_category_by_key_not_found_is_none() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("categories/key=women-unknown")))
        .respond_with(ResponseTemplate::new(404).set_body_json(api_error(
            404,
            "ResourceNotFound",
            "The Resource with key 'women-unknown' was not found.",
        )))
        .mount(&server)
        .await;

    let category = client_for(&server)
        .get_category_by_key("women-unknown")
        .await
        .unwrap();

    assert!(category.is_none());
}

#[tokio::test]
async fn test_category_key_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("categories/key=women%3Fwhere=x%2Ftops")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(category_json("c-1", "women?where=x/tops", None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let category = client_for(&server)
        .get_category_by_key("women?where=x/tops")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(category.id.as_str(), "c-1");
    let requests = server.received_requests().await.unwrap();
    let lookup = requests
        .iter()
        .find(|r| r.url.path().starts_with(&api_path("categories/")))
        .unwrap();
    assert_eq!(lookup.url.query(), None);
}

#[tokio::test]
async fn test_product_key_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("product-projections/key=tops%2F001%3Fstaged=true")))
        .and(query_param("staged", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_projection_json(
            "p-1",
            "tops/001?staged=true",
            "tops-001-1",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let product = client_for(&server)
        .get_product_projection_by_key("tops/001?staged=true")
        .await
        .unwrap();

    assert!(product.is_some());
}

#[tokio::test]
async fn test_product_type_key_predicate_is_escaped() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("product-types")))
        .and(query_param("where", "key=\"shirt\\\" or key=\\\"x\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let product_type = client_for(&server)
        .find_product_type_by_key("shirt\" or key=\"x")
        .await
        .unwrap();

    assert!(product_type.is_none());
}

#[tokio::test]
async fn test_find_product_by_sku_filters_published_projections() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("product-projections/search")))
        .and(query_param("filter", "variants.sku:\"women-tops-001-1\""))
        .and(query_param("staged", "false"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![
            product_projection_json("p-1", "women-tops-001", "women-tops-001-1"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let product = client_for(&server)
        .find_product_by_sku("women-tops-001-1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(product.key.as_deref(), Some("women-tops-001"));
    assert!(product.variant_by_sku("women-tops-001-1").is_some());
}

#[tokio::test]
async fn test_find_product_by_sku_without_match_is_none() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(api_path("product-projections/search")))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![])))
        .mount(&server)
        .await;

    let product = client_for(&server).find_product_by_sku("nope").await.unwrap();

    assert!(product.is_none());
}
