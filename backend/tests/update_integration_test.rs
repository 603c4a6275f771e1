//! Integration tests for product-scoped update endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

async fn create_product(app: &common::TestApp, token: &str, name: &str) -> String {
    let body = json!({ "name": name });
    let (status, response) = app.post_auth("/api/product", token, &body.to_string()).await;
    assert_eq!(status, StatusCode::OK, "create product failed: {}", response);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    response["data"]["id"].as_str().unwrap().to_string()
}

async fn create_update(
    app: &common::TestApp,
    token: &str,
    product_id: &str,
    title: &str,
) -> serde_json::Value {
    let body = json!({
        "title": title,
        "body": "Release notes",
        "productId": product_id
    });
    let (status, response) = app.post_auth("/api/update", token, &body.to_string()).await;
    assert_eq!(status, StatusCode::OK, "create update failed: {}", response);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    response["data"].clone()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_update_against_owned_product() {
    let app = common::TestApp::new().await;
    let token = app.signup(&unique_username("creator"), "password123").await;
    let product_id = create_product(&app, &token, "Widget").await;

    let created = create_update(&app, &token, &product_id, "v1.0.0").await;

    assert_eq!(created["title"], "v1.0.0");
    assert_eq!(created["productId"], product_id.as_str());
    // Status defaults when not supplied
    assert_eq!(created["status"], "IN_PROGRESS");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_update_against_foreign_product_is_rejected() {
    let app = common::TestApp::new().await;

    let token_a = app.signup(&unique_username("owner"), "password123").await;
    let product_id = create_product(&app, &token_a, "Widget").await;

    let token_b = app.signup(&unique_username("intruder"), "password123").await;

    let body = json!({
        "title": "v1.0.0",
        "body": "Release notes",
        "productId": product_id
    });
    let (status, _) = app.post_auth("/api/update", &token_b, &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_update_invalid_status_rejected_before_accessor() {
    let app = common::TestApp::new().await;
    let token = app.signup(&unique_username("status"), "password123").await;
    let product_id = create_product(&app, &token, "Widget").await;

    let body = json!({
        "title": "v1.0.0",
        "body": "Release notes",
        "productId": product_id,
        "status": "CANCELLED"
    });
    let (status, _) = app.post_auth("/api/update", &token, &body.to_string()).await;

    // Rejected at deserialization, before any query runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was created
    let (_, response) = app.get_auth("/api/update", &token).await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(response["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_is_union_of_owned_products_in_order() {
    let app = common::TestApp::new().await;
    let token = app.signup(&unique_username("union"), "password123").await;

    let first_product = create_product(&app, &token, "First").await;
    let second_product = create_product(&app, &token, "Second").await;

    // Interleave creation across products; listing still groups by product
    create_update(&app, &token, &first_product, "first-1").await;
    create_update(&app, &token, &second_product, "second-1").await;
    create_update(&app, &token, &first_product, "first-2").await;

    // Another user's updates never appear
    let other_token = app.signup(&unique_username("union_other"), "password123").await;
    let other_product = create_product(&app, &other_token, "Other").await;
    create_update(&app, &other_token, &other_product, "other-1").await;

    let (status, response) = app.get_auth("/api/update", &token).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let titles: Vec<&str> = response["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["title"].as_str().unwrap())
        .collect();

    // Product order first, update order within each product
    assert_eq!(titles, vec!["first-1", "first-2", "second-1"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_update_not_reachable_by_other_user() {
    let app = common::TestApp::new().await;

    let token_a = app.signup(&unique_username("reader_a"), "password123").await;
    let product_id = create_product(&app, &token_a, "Widget").await;
    let update = create_update(&app, &token_a, &product_id, "v1.0.0").await;
    let update_id = update["id"].as_str().unwrap();

    let token_b = app.signup(&unique_username("reader_b"), "password123").await;

    let (status, response) = app
        .get_auth(&format!("/api/update/{}", update_id), &token_b)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!response.contains("v1.0.0"));

    // The owner still reaches it
    let (status, _) = app
        .get_auth(&format!("/api/update/{}", update_id), &token_a)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_put_update_merges_fields_and_resets_updated_at() {
    let app = common::TestApp::new().await;
    let token = app.signup(&unique_username("putter"), "password123").await;
    let product_id = create_product(&app, &token, "Widget").await;
    let update = create_update(&app, &token, &product_id, "v1.0.0").await;
    let update_id = update["id"].as_str().unwrap();

    let body = json!({ "status": "SHIPPED", "version": "1.0.0" });
    let (status, response) = app
        .put_auth(&format!("/api/update/{}", update_id), &token, &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    // Supplied fields merged, absent fields untouched
    assert_eq!(response["data"]["status"], "SHIPPED");
    assert_eq!(response["data"]["version"], "1.0.0");
    assert_eq!(response["data"]["title"], "v1.0.0");
    assert_eq!(response["data"]["body"], "Release notes");
    assert!(
        response["data"]["updatedAt"].as_str().unwrap()
            >= response["data"]["createdAt"].as_str().unwrap()
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_put_update_by_other_user_is_not_found() {
    let app = common::TestApp::new().await;

    let token_a = app.signup(&unique_username("put_owner"), "password123").await;
    let product_id = create_product(&app, &token_a, "Widget").await;
    let update = create_update(&app, &token_a, &product_id, "v1.0.0").await;
    let update_id = update["id"].as_str().unwrap();

    let token_b = app.signup(&unique_username("put_intruder"), "password123").await;

    let body = json!({ "title": "hijacked" });
    let (status, _) = app
        .put_auth(&format!("/api/update/{}", update_id), &token_b, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unchanged for the owner
    let (_, response) = app
        .get_auth(&format!("/api/update/{}", update_id), &token_a)
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["data"]["title"], "v1.0.0");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_update_scoped_to_owner() {
    let app = common::TestApp::new().await;

    let token_a = app.signup(&unique_username("del_owner"), "password123").await;
    let product_id = create_product(&app, &token_a, "Widget").await;
    let update = create_update(&app, &token_a, &product_id, "v1.0.0").await;
    let update_id = update["id"].as_str().unwrap();

    // Another user cannot delete it
    let token_b = app.signup(&unique_username("del_intruder"), "password123").await;
    let (status, _) = app
        .delete_auth(&format!("/api/update/{}", update_id), &token_b)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The owner can, and gets the deleted record back
    let (status, response) = app
        .delete_auth(&format!("/api/update/{}", update_id), &token_a)
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["data"]["title"], "v1.0.0");

    let (status, _) = app
        .get_auth(&format!("/api/update/{}", update_id), &token_a)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_unknown_update_is_not_found() {
    let app = common::TestApp::new().await;
    let token = app.signup(&unique_username("missing"), "password123").await;

    let (status, _) = app
        .get_auth(&format!("/api/update/{}", uuid::Uuid::new_v4()), &token)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
