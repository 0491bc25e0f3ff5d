//! Authentication module for Lentille.
//!
//! This module provides password hashing, user registration, session
//! storage and the authentication guard used by protected routes.

mod password;
mod registration;
mod session;
pub mod validation;

pub use password::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking, PasswordError,
};
pub use registration::register;
pub use session::{
    login, logout, require_authenticated, start_session, AuthSession, MemorySessionStore, SessionStore,
    DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_SESSION_DURATION_SECS, MAX_SESSION_SECS,
};
pub use validation::ValidationError;
