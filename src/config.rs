//! Configuration module for Lentille.

use serde::Deserialize;
use std::path::Path;

use crate::auth::MAX_SESSION_SECS;
use crate::{LentilleError, Result};

/// Environment variable overriding `database.url`.
pub const ENV_DATABASE_URL: &str = "LENTILLE_DATABASE_URL";

/// Environment variable overriding `session.secret`.
pub const ENV_SESSION_SECRET: &str = "LENTILLE_SESSION_SECRET";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection string (e.g. `sqlite://data/lentille.db`).
    #[serde(default = "default_db_url")]
    pub url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_url() -> String {
    "sqlite://data/lentille.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret used to sign the session cookie (must be set).
    #[serde(default)]
    pub secret: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Absolute session lifetime in seconds.
    #[serde(default = "default_session_duration")]
    pub duration_secs: u64,
    /// Idle timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    /// Interval between expired-session sweeps, in seconds.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

fn default_cookie_name() -> String {
    "lentille_session".to_string()
}

fn default_session_duration() -> u64 {
    24 * 60 * 60
}

fn default_idle_timeout() -> u64 {
    2 * 60 * 60
}

fn default_cleanup_interval() -> u64 {
    600
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            cookie_name: default_cookie_name(),
            duration_secs: default_session_duration(),
            idle_timeout_secs: default_idle_timeout(),
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/lentille.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Web layer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Login attempts allowed per client IP per minute.
    #[serde(default = "default_login_rate_limit")]
    pub login_rate_limit: u32,
    /// Mark cookies `Secure` (set when served over HTTPS).
    #[serde(default)]
    pub secure_cookies: bool,
    /// Take the client IP from `X-Forwarded-For` / `X-Real-IP`.
    ///
    /// Only enable behind a reverse proxy that overwrites these headers.
    #[serde(default)]
    pub trust_proxy_headers: bool,
}

fn default_login_rate_limit() -> u32 {
    10
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            login_rate_limit: default_login_rate_limit(),
            secure_cookies: false,
            trust_proxy_headers: false,
        }
    }
}

/// Site information shown on the landing page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Name of the site.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Short description.
    #[serde(default = "default_site_description")]
    pub description: String,
    /// Image paths listed on the photography gallery page.
    #[serde(default)]
    pub gallery: Vec<String>,
}

fn default_site_name() -> String {
    "Lentille".to_string()
}

fn default_site_description() -> String {
    "Appareils photo, télescopes et forum d'astrophotographie".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            description: default_site_description(),
            gallery: Vec::new(),
        }
    }
}

/// Forum configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForumConfig {
    /// Categories created at startup when missing.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
}

fn default_categories() -> Vec<String> {
    vec![
        "Appareils photo".to_string(),
        "Télescopes".to_string(),
        "Astrophotographie".to_string(),
    ]
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            default_categories: default_categories(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Optional TOML file with `[[cameras]]` and `[[telescopes]]` entries.
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web layer configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Forum configuration.
    #[serde(default)]
    pub forum: ForumConfig,
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LentilleError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `LENTILLE_DATABASE_URL`: database connection string
    /// - `LENTILLE_SESSION_SECRET`: session signing secret
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_DATABASE_URL) {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
        if let Ok(secret) = std::env::var(ENV_SESSION_SECRET) {
            if !secret.is_empty() {
                self.session.secret = secret;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.session.secret.is_empty() {
            return Err(LentilleError::Config(format!(
                "session.secret is not set. Set it in config.toml or via {ENV_SESSION_SECRET}."
            )));
        }
        if self.database.url.is_empty() {
            return Err(LentilleError::Config("database.url is empty".to_string()));
        }
        for (name, secs) in [
            ("session.duration_secs", self.session.duration_secs),
            ("session.idle_timeout_secs", self.session.idle_timeout_secs),
        ] {
            if secs == 0 || secs > MAX_SESSION_SECS {
                return Err(LentilleError::Config(format!(
                    "{name} must be between 1 and {MAX_SESSION_SECS}, got {secs}"
                )));
            }
        }
        Ok(())
    }
}
