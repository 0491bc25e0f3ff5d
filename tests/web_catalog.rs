//! Web Catalog Tests
//!
//! Integration tests for equipment listings, detail pages and the gallery.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{flash_messages, location, register_and_login, spawn_app};
use lentille::web::messages;

#[tokio::test]
async fn test_camera_list_requires_login() {
    let app = spawn_app().await;

    let response = app.server.get("/appareil_photo").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert!(!response.text().contains("Nikon"));

    let body = app.server.get("/login").await.json::<Value>();
    assert_eq!(flash_messages(&body), vec![messages::LOGIN_REQUIRED]);
}

#[tokio::test]
async fn test_guarded_pages_redirect_anonymous_users() {
    let app = spawn_app().await;

    for path in [
        "/telescope",
        "/photographies",
        "/forum/new_thread/1",
        "/forum/reply/1",
    ] {
        let response = app.server.get(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login", "path {path}");
    }
}

#[tokio::test]
async fn test_camera_list_in_insertion_order() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;

    let response = app.server.get("/appareil_photo").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["brand"], "Nikon");
    assert_eq!(items[0]["model"], "Z6 II");
    assert_eq!(items[0]["score"], 8.7);
    assert_eq!(items[1]["brand"], "Canon");
}

#[tokio::test]
async fn test_telescope_list() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;

    let body = app.server.get("/telescope").await.json::<Value>();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["model"], "NexStar 8SE");
}

#[tokio::test]
async fn test_detail_pages_are_public() {
    let app = spawn_app().await;

    let response = app.server.get("/appareil/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["model"], "Z6 II");

    let response = app.server.get("/telescope/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["brand"], "Celestron");
}

#[tokio::test]
async fn test_missing_item_is_404() {
    let app = spawn_app().await;

    let response = app.server.get("/appareil/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Appareil photo introuvable.");

    // Camera and telescope ids are independent.
    let response = app.server.get("/telescope/2").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gallery() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;

    let body = app.server.get("/photographies").await.json::<Value>();
    assert_eq!(body["data"]["images"][0], "m42.jpg");
    assert_eq!(body["data"]["images"][1], "saturne.jpg");
}
