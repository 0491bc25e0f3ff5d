//! Error types for Lentille.

use thiserror::Error;

/// Common error type for Lentille.
#[derive(Error, Debug)]
pub enum LentilleError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input (empty or oversized field).
    #[error("validation error: {0}")]
    Validation(String),

    /// Username already registered.
    #[error("username already exists: {0}")]
    DuplicateUser(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Password did not match the stored hash.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No user is bound to the current session.
    #[error("authentication required")]
    Unauthenticated,

    /// Authentication machinery failure (hashing, malformed hash).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for LentilleError {
    fn from(e: sqlx::Error) -> Self {
        LentilleError::Database(e.to_string())
    }
}

/// Result type alias for Lentille operations.
pub type Result<T> = std::result::Result<T, LentilleError>;
