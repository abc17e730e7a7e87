//! Integration tests for the manifest service.
//!
//! Each test binds a real server to an ephemeral port and talks to it over HTTP.
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use app_manifest::api::{create_router, AppState};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

/// Spawn the router on 127.0.0.1 and return its address.
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::new()))
            .await
            .unwrap();
    });

    addr
}

#[tokio::test]
async fn test_manifest_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/manifest.json?name=My+App"))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "My App",
            "display": "standalone",
            "icons": [{ "src": "/static/icon.png", "sizes": "256x256" }],
        })
    );
}

#[tokio::test]
async fn test_manifest_name_roundtrips_through_query_encoding() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    for name in ["", "plain", "with space", "a&b=c", "emoji 🚀", "quote \" and \\"] {
        let body: serde_json::Value = client
            .get(format!("http://{addr}/manifest.json"))
            .query(&[("name", name)])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["name"], name, "name {name:?} was altered");
    }
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let addr = spawn_server().await;
    let url = format!("http://{addr}/manifest.json?name=Stable");

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_manifest_bytes_match_rendered_document() {
    let addr = spawn_server().await;

    let body = reqwest::get(format!("http://{addr}/manifest.json?name=caf%C3%A9"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(
        body,
        app_manifest::ManifestDocument::new("café").to_json().unwrap()
    );
    assert!(body.starts_with(r#"{"name": "caf\u00e9", "display": "standalone""#));
}

#[tokio::test]
async fn test_health_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
