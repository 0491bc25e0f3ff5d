//! Test helpers for the web integration tests.
//!
//! Builds an in-memory application behind an `axum_test::TestServer` that
//! keeps cookies between requests, like a browser would.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::LOCATION;
use axum_test::{TestResponse, TestServer, TestServerConfig};
use serde_json::Value;

use lentille::auth::MemorySessionStore;
use lentille::catalog::{CatalogRepository, EquipmentKind, NewEquipmentItem};
use lentille::web::middleware::RateLimitState;
use lentille::web::{create_router, AppState};
use lentille::{Config, Database, ForumService};

/// A running test application.
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
    pub sessions: Arc<MemorySessionStore>,
}

/// Configuration used by the tests.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.session.secret = "test-secret-key-for-testing-only".to_string();
    config.web.login_rate_limit = 100;
    config.site.gallery = vec!["m42.jpg".to_string(), "saturne.jpg".to_string()];
    config
}

/// Spawn the application with the test configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn the application with a custom configuration.
///
/// The forum gets its default categories and the catalog two cameras and
/// one telescope.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    ForumService::new(db.pool())
        .ensure_categories(config.forum.default_categories.as_slice())
        .await
        .expect("Failed to create categories");

    let catalog = CatalogRepository::new(db.pool());
    for (kind, item) in [
        (
            EquipmentKind::Camera,
            NewEquipmentItem::new("Nikon", "Z6 II")
                .with_score(8.7)
                .with_category("Hybride"),
        ),
        (
            EquipmentKind::Camera,
            NewEquipmentItem::new("Canon", "EOS R6").with_category("Hybride"),
        ),
        (
            EquipmentKind::Telescope,
            NewEquipmentItem::new("Celestron", "NexStar 8SE").with_category("Schmidt-Cassegrain"),
        ),
    ] {
        catalog
            .create_item(kind, &item)
            .await
            .expect("Failed to seed catalog");
    }

    let sessions = Arc::new(MemorySessionStore::from_config(&config.session));
    let app_state = AppState::new(db.clone(), sessions.clone(), &config);
    let rate_limit = Arc::new(RateLimitState::from_config(&config.web));
    let router = create_router(app_state, rate_limit);

    let server = TestServer::new_with_config(
        router,
        TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        },
    )
    .expect("Failed to create test server");

    TestApp {
        server,
        db,
        sessions,
    }
}

/// Submit the registration form.
pub async fn register(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/register")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Submit the login form.
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Register a user, which also logs it in.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) {
    let response = register(server, username, password).await;
    assert_eq!(location(&response), "/");
}

/// Target of a redirect response.
pub fn location(response: &TestResponse) -> String {
    response
        .header(LOCATION)
        .to_str()
        .expect("Location is not ASCII")
        .to_string()
}

/// Flash message texts of a page response.
pub fn flash_messages(body: &Value) -> Vec<String> {
    body["messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
