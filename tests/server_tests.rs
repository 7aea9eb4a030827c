//! End-to-end tests against a real listener.

use item_cache::{api::create_router, AppState, Item, ItemStore};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let state = AppState::new(ItemStore::open_in_memory().unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    format!("http://{}/items", addr)
}

#[tokio::test]
async fn test_crud_cycle_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Item = client
        .post(&base)
        .json(&json!({ "title": "over the wire" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.title, "over the wire");

    let url = format!("{}?id={}", base, created.id);

    let fetched: Item = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    let response = client
        .put(&url)
        .json(&json!({ "title": "renamed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!("Item updated successfully"));

    let listed: Vec<Item> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, vec![Item::new(created.id, "renamed")]);

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_method_not_allowed_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for method in [Method::PATCH, Method::OPTIONS, Method::TRACE] {
        let response = client.request(method.clone(), &base).send().await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        let body: Value = response.json().await.unwrap();
        assert!(body.get("error").is_some());
    }

    // HEAD responses carry no body, only the status.
    let response = client.head(format!("{}?id=1", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
