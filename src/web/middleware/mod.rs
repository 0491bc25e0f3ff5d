//! Middleware for the web layer.

pub mod rate_limit;
pub mod security;
pub mod session;

pub use rate_limit::{login_rate_limit, RateLimitState};
pub use security::security_headers;
pub use session::{require_login, CurrentUser, OptionalUser};
