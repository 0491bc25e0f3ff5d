//! Login rate limiting middleware.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};

use crate::config::WebConfig;
use crate::web::error::ApiError;
use crate::web::messages;

/// Per-IP limiter for login submissions.
pub struct RateLimitState {
    login_limiter: DefaultKeyedRateLimiter<String>,
    login_rate_limit: u32,
    trust_proxy_headers: bool,
}

impl RateLimitState {
    /// Create a new rate limit state allowing `login_rate_limit`
    /// submissions per minute and per IP.
    pub fn new(login_rate_limit: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(login_rate_limit).unwrap_or(NonZeroU32::MIN));
        Self {
            login_limiter: RateLimiter::keyed(quota),
            login_rate_limit,
            trust_proxy_headers: false,
        }
    }

    /// Create a rate limit state from the `[web]` configuration.
    pub fn from_config(config: &WebConfig) -> Self {
        Self::new(config.login_rate_limit).with_proxy_headers(config.trust_proxy_headers)
    }

    /// Key clients on `X-Forwarded-For` / `X-Real-IP` instead of the peer
    /// address.
    pub fn with_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }

    /// Configured submissions per minute.
    pub fn login_rate_limit(&self) -> u32 {
        self.login_rate_limit
    }

    /// Check if a login submission is allowed for the given IP.
    pub fn check_login(&self, ip: &str) -> bool {
        self.login_limiter.check_key(&ip.to_string()).is_ok()
    }

    /// Forget IPs whose quota has fully replenished.
    pub fn cleanup(&self) {
        self.login_limiter.retain_recent();
        self.login_limiter.shrink_to_fit();
    }

    /// Start a background task to periodically clean up old entries.
    pub fn start_cleanup_task(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            interval.tick().await;
            loop {
                interval.tick().await;
                self.cleanup();
            }
        });
    }
}

/// Extract client IP from request.
///
/// Forwarded headers are client-controlled and only read when
/// `trust_proxy_headers` is set.
fn get_client_ip(req: &Request<Body>, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = req
            .headers()
            .get("X-Forwarded-For")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
        {
            return ip.to_string();
        }

        if let Some(real_ip) = req
            .headers()
            .get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
        {
            return real_ip.trim().to_string();
        }
    }

    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

/// Rate limiting middleware for the login form.
///
/// Only `POST` requests count against the quota.
pub async fn login_rate_limit(
    State(state): State<Arc<RateLimitState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    let ip = get_client_ip(&req, state.trust_proxy_headers);
    if !state.check_login(&ip) {
        tracing::warn!(ip = %ip, "Login rate limit exceeded");
        return ApiError::too_many_requests(messages::TOO_MANY_ATTEMPTS).into_response();
    }

    next.run(req).await
}
