//! Web server for Lentille.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::auth::SessionStore;
use crate::{Config, Database, LentilleError, Result};

use super::handlers::AppState;
use super::middleware::RateLimitState;
use super::router::create_router;

/// Web server for the site.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: AppState,
    /// Login rate limiter.
    rate_limit: Arc<RateLimitState>,
    /// Interval between session cleanups.
    cleanup_interval: Duration,
}

impl WebServer {
    /// Create a new web server from the configuration.
    pub fn new(config: &Config, db: Database) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| LentilleError::Config(format!("invalid server address: {}", e)))?;

        Ok(Self {
            addr,
            app_state: AppState::from_config(db, config),
            rate_limit: Arc::new(RateLimitState::from_config(&config.web)),
            cleanup_interval: Duration::from_secs(config.session.cleanup_interval_secs.max(1)),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the session cleanup background task.
    fn start_session_cleanup_task(sessions: Arc<dyn SessionStore>, every: Duration) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);

            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;
                let removed = sessions.cleanup();
                if removed > 0 {
                    tracing::info!(removed, "Cleaned up expired sessions");
                } else {
                    tracing::debug!("No expired sessions to clean up");
                }
            }
        });
    }

    async fn bind(self) -> std::io::Result<(TcpListener, Router)> {
        let sessions = self.app_state.sessions.clone();
        let router = create_router(self.app_state, self.rate_limit.clone())
            .layer(CompressionLayer::new());

        let listener = TcpListener::bind(self.addr).await?;

        // Background tasks start after a successful bind
        Self::start_session_cleanup_task(sessions, self.cleanup_interval);
        self.rate_limit.start_cleanup_task();

        Ok((listener, router))
    }

    /// Run the web server until it fails.
    pub async fn run(self) -> std::io::Result<()> {
        let (listener, router) = self.bind().await?;
        tracing::info!("Web server listening on http://{}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }

    /// Run the server in the background and return the bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::io::Result<SocketAddr> {
        let (listener, router) = self.bind().await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
