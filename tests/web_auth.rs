//! Web Authentication Tests
//!
//! Integration tests for registration, login and logout.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use common::{flash_messages, location, login, register, register_and_login, spawn_app, spawn_app_with, test_config};
use lentille::web::messages;
use lentille::UserRepository;

#[tokio::test]
async fn test_register_logs_in_and_redirects_home() {
    let app = spawn_app().await;

    let response = register(&app.server, "alice", "correct").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let body = app.server.get("/").await.json::<Value>();
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert_eq!(flash_messages(&body), vec![messages::REGISTERED]);

    // Flash messages are shown once.
    let body = app.server.get("/").await.json::<Value>();
    assert!(flash_messages(&body).is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = spawn_app().await;
    register(&app.server, "alice", "correct").await;

    let response = register(&app.server, "alice", "another").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");

    let body = app.server.get("/register").await.json::<Value>();
    assert_eq!(flash_messages(&body), vec![messages::DUPLICATE_USER]);

    let count = UserRepository::new(app.db.pool()).count().await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_empty_username() {
    let app = spawn_app().await;

    let response = register(&app.server, "", "correct").await;
    assert_eq!(location(&response), "/register");

    let body = app.server.get("/register").await.json::<Value>();
    assert_eq!(
        flash_messages(&body),
        vec!["Le nom d'utilisateur est requis"]
    );
    assert_eq!(body["data"]["action"], "/register");
}

#[tokio::test]
async fn test_register_oversized_username_rejected() {
    let app = spawn_app().await;

    let response = register(&app.server, &"a".repeat(33), "correct").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["username"].is_array());
}

#[tokio::test]
async fn test_login_success() {
    let app = spawn_app().await;
    register(&app.server, "alice", "correct").await;
    app.server.get("/logout").await;

    let response = login(&app.server, "alice", "correct").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let body = app.server.get("/").await.json::<Value>();
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert!(flash_messages(&body).contains(&messages::LOGGED_IN.to_string()));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = spawn_app().await;
    register(&app.server, "alice", "correct").await;
    app.server.get("/logout").await;

    let response = login(&app.server, "alice", "wrong").await;
    assert_eq!(location(&response), "/login");

    let body = app.server.get("/login").await.json::<Value>();
    assert!(flash_messages(&body).contains(&messages::WRONG_PASSWORD.to_string()));

    let body = app.server.get("/").await.json::<Value>();
    assert!(body["data"]["user"].is_null());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = spawn_app().await;

    let response = login(&app.server, "ghost", "whatever").await;
    assert_eq!(location(&response), "/login");

    let body = app.server.get("/login").await.json::<Value>();
    assert_eq!(flash_messages(&body), vec![messages::UNKNOWN_USER]);
}

#[tokio::test]
async fn test_logout_closes_session() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;

    let response = app.server.get("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let body = app.server.get("/").await.json::<Value>();
    assert!(body["data"]["user"].is_null());

    let response = app.server.get("/appareil_photo").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = spawn_app().await;

    let response = app.server.get("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_login_rate_limited() {
    let mut config = test_config();
    config.web.login_rate_limit = 2;
    let app = spawn_app_with(config).await;

    login(&app.server, "ghost", "x").await.assert_status(StatusCode::SEE_OTHER);
    login(&app.server, "ghost", "x").await.assert_status(StatusCode::SEE_OTHER);

    let response = login(&app.server, "ghost", "x").await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.json::<Value>()["error"]["code"], "TOO_MANY_REQUESTS");

    // Viewing the form is not limited.
    app.server.get("/login").await.assert_status_ok();
}

async fn login_from(server: &TestServer, forwarded_for: &str) -> TestResponse {
    server
        .post("/login")
        .add_header(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_str(forwarded_for).unwrap(),
        )
        .form(&[("username", "ghost"), ("password", "x")])
        .await
}

#[tokio::test]
async fn test_login_rate_limit_ignores_forwarded_for_by_default() {
    let mut config = test_config();
    config.web.login_rate_limit = 2;
    let app = spawn_app_with(config).await;

    login_from(&app.server, "203.0.113.1").await.assert_status(StatusCode::SEE_OTHER);
    login_from(&app.server, "203.0.113.2").await.assert_status(StatusCode::SEE_OTHER);

    for i in 3..10 {
        login_from(&app.server, &format!("203.0.113.{i}"))
            .await
            .assert_status(StatusCode::TOO_MANY_REQUESTS);
    }
}

#[tokio::test]
async fn test_login_rate_limit_keys_on_trusted_proxy_header() {
    let mut config = test_config();
    config.web.login_rate_limit = 1;
    config.web.trust_proxy_headers = true;
    let app = spawn_app_with(config).await;

    login_from(&app.server, "203.0.113.1").await.assert_status(StatusCode::SEE_OTHER);
    login_from(&app.server, "203.0.113.2").await.assert_status(StatusCode::SEE_OTHER);
    login_from(&app.server, "203.0.113.1")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_oversized_session_duration_does_not_break_login() {
    let mut config = test_config();
    config.session.duration_secs = 10_000_000_000_000;
    let app = spawn_app_with(config).await;

    let response = register(&app.server, "alice", "correct").await;
    assert_eq!(location(&response), "/");

    let body = app.server.get("/").await.json::<Value>();
    assert_eq!(body["data"]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_register_replaces_previous_session() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;
    assert_eq!(app.sessions.len(), 1);

    register_and_login(&app.server, "bob", "correct").await;
    assert_eq!(app.sessions.len(), 1);

    let body = app.server.get("/").await.json::<Value>();
    assert_eq!(body["data"]["user"]["username"], "bob");
}

#[tokio::test]
async fn test_login_replaces_previous_session() {
    let app = spawn_app().await;
    register_and_login(&app.server, "alice", "correct").await;
    register_and_login(&app.server, "bob", "correct").await;

    login(&app.server, "alice", "correct").await;
    assert_eq!(app.sessions.len(), 1);
}

#[tokio::test]
async fn test_secure_cookies_cover_flash_cookie() {
    let mut config = test_config();
    config.web.secure_cookies = true;
    let app = spawn_app_with(config).await;

    let response = register(&app.server, "alice", "correct").await;
    let cookies: Vec<String> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();

    for name in ["lentille_flash=", "lentille_session="] {
        let cookie = cookies
            .iter()
            .find(|c| c.starts_with(name))
            .unwrap_or_else(|| panic!("missing {name} cookie"));
        assert!(cookie.contains("Secure"), "{cookie}");
    }
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;
    assert_eq!(response.header("X-Content-Type-Options"), "nosniff");
    assert_eq!(response.header("X-Frame-Options"), "DENY");
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
