//! Router configuration for the web layer.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    camera_detail, category_view, forum_index, health_check, index, list_cameras,
    list_telescopes, login, login_form, logout, new_thread, new_thread_form, photographies,
    register, register_form, reply, reply_form, telescope_detail, thread_view, AppState,
};
use super::middleware::{login_rate_limit, require_login, security_headers, RateLimitState};

/// Create the application router.
pub fn create_router(app_state: AppState, rate_limit: Arc<RateLimitState>) -> Router {
    // Login form, rate limited on submission
    let login_routes = Router::new()
        .route("/login", get(login_form).post(login))
        .route_layer(middleware::from_fn_with_state(rate_limit, login_rate_limit));

    // Open to everyone
    let public_routes = Router::new()
        .route("/", get(index))
        .route("/register", get(register_form).post(register))
        .route("/logout", get(logout))
        .route("/appareil/:id", get(camera_detail))
        .route("/telescope/:id", get(telescope_detail))
        .route("/forum", get(forum_index))
        .route("/forum/category/:id", get(category_view))
        .route("/forum/thread/:id", get(thread_view));

    // Logged-in users only
    let protected_routes = Router::new()
        .route("/appareil_photo", get(list_cameras))
        .route("/telescope", get(list_telescopes))
        .route("/photographies", get(photographies))
        .route(
            "/forum/new_thread/:category_id",
            get(new_thread_form).post(new_thread),
        )
        .route("/forum/reply/:thread_id", get(reply_form).post(reply))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_login,
        ));

    Router::new()
        .merge(login_routes)
        .merge(public_routes)
        .merge(protected_routes)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/health", get(health_check))
}
