//! Forum API integration tests

use axum::http::StatusCode;
use serde_json::Value;

use forum::backend::database::DEFAULT_CATEGORIES;

use crate::common::create_test_server;

#[tokio::test]
async fn test_home_anonymous() {
    let (server, _) = create_test_server().await;
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_text("User is not logged in");
}

#[tokio::test]
async fn test_list_categories() {
    let (server, _) = create_test_server().await;

    let response = server.get("/api/categories").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let categories: Vec<Value> = response.json();
    let names: Vec<&str> = categories.iter().filter_map(|c| c["name"].as_str()).collect();
    assert_eq!(names, DEFAULT_CATEGORIES.to_vec());
    assert_eq!(categories[0]["number"], 1);
}
