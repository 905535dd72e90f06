//! Category hierarchy materialization against the mock API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use ocm_catalog_admin::{CategoryService, ErrorKind, materialize};
use ocm_catalog_core::CategoryNode;
use ocm_catalog_integration_tests::{api_error, api_path, category_json, client_for, mount_token};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Echo the draft back as a created category with ID `id-<key>`.
fn echo_category(request: &Request) -> ResponseTemplate {
    let draft: Value = serde_json::from_slice(&request.body).unwrap();
    let key = draft["key"].as_str().unwrap();
    let parent = draft["parent"]["id"].as_str();
    ResponseTemplate::new(201).set_body_json(category_json(&format!("id-{key}"), key, parent))
}

async fn mount_echo(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .respond_with(echo_category)
        .mount(server)
        .await;
}

/// Keys of category create requests, in the order they arrived.
async fn create_requests(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == api_path("categories"))
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["key"].as_str().unwrap().to_string()
        })
        .collect()
}

fn forest() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new("women", "Women", "women")
            .with_description("Women's clothing and accessories")
            .with_child(
                CategoryNode::new("women-clothing", "Clothing", "women-clothing")
                    .with_child(CategoryNode::new("women-tops", "Tops", "women-tops"))
                    .with_child(CategoryNode::new("women-dresses", "Dresses", "women-dresses")),
            )
            .with_child(
                CategoryNode::new("women-shoes", "Shoes", "women-shoes")
                    .with_child(CategoryNode::new("women-heels", "Heels", "women-heels")),
            ),
        CategoryNode::new("men", "Men", "men"),
    ]
}

#[tokio::test]
async fn test_materialize_creates_parents_first_in_pre_order() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_echo(&server).await;

    let created = materialize(&client_for(&server), &forest()).await.unwrap();

    let keys: Vec<&str> = created.iter().map(|c| c.key.as_str()).collect();
    let expected = [
        "women",
        "women-clothing",
        "women-tops",
        "women-dresses",
        "women-shoes",
        "women-heels",
        "men",
    ];
    assert_eq!(keys, expected);
    assert_eq!(create_requests(&server).await, expected);

    let parent_of = |key: &str| {
        created
            .iter()
            .find(|c| c.key == key)
            .and_then(|c| c.parent_id.as_ref())
            .map(|id| id.as_str().to_string())
    };
    assert_eq!(parent_of("women"), None);
    assert_eq!(parent_of("men"), None);
    assert_eq!(parent_of("women-clothing").as_deref(), Some("id-women"));
    assert_eq!(parent_of("women-dresses").as_deref(), Some("id-women-clothing"));
    assert_eq!(parent_of("women-heels").as_deref(), Some("id-women-shoes"));
}

#[tokio::test]
async fn test_materialize_sends_description_only_when_present() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_echo(&server).await;

    materialize(&client_for(&server), &forest()).await.unwrap();

    let bodies: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == api_path("categories"))
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();

    assert_eq!(
        bodies[0]["description"],
        json!({ "en": "Women's clothing and accessories" })
    );
    assert!(bodies[0].get("parent").is_none());
    assert!(bodies[1].get("description").is_none());
}

#[tokio::test]
async fn test_duplicate_key_stops_traversal_and_reports_progress() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .and(body_partial_json(json!({ "key": "women-shoes" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error(
            400,
            "DuplicateField",
            "A duplicate value '\"women-shoes\"' exists for field 'key'.",
        )))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_echo(&server).await;

    let service = CategoryService::new(client_for(&server));
    let err = service.create_hierarchy(&forest()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.key, "women-shoes");
    assert_eq!(err.path, ["women", "women-shoes"]);
    assert!(err.to_string().contains("women > women-shoes"));

    let created: Vec<&str> = err.created.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(
        created,
        ["women", "women-clothing", "women-tops", "women-dresses"]
    );

    // Neither the failed node's children nor later roots are attempted.
    let attempted = create_requests(&server).await;
    assert_eq!(attempted.last().map(String::as_str), Some("women-shoes"));
    assert!(!attempted.iter().any(|k| k == "women-heels" || k == "men"));
}

#[tokio::test]
async fn test_rerun_fails_on_first_root() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error(
            400,
            "DuplicateField",
            "A duplicate value '\"women\"' exists for field 'key'.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let err = materialize(&client_for(&server), &forest())
        .await
        .unwrap_err();

    assert_eq!(err.key, "women");
    assert_eq!(err.path, ["women"]);
    assert!(err.created.is_empty());
}

#[tokio::test]
async fn test_transient_failure_is_not_retried() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = materialize(&client_for(&server), &forest())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transient);
}

#[tokio::test]
async fn test_empty_forest_makes_no_requests() {
    let server = MockServer::start().await;

    let created = materialize(&client_for(&server), &[]).await.unwrap();

    assert!(created.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
