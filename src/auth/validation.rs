//! Input validation for Lentille registration and login.

use thiserror::Error;

use crate::LentilleError;

/// Maximum username length (in characters).
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum password length (in bytes).
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is empty or only whitespace.
    #[error("Le nom d'utilisateur est requis")]
    UsernameEmpty,

    /// Username is too long.
    #[error("Le nom d'utilisateur ne doit pas dépasser {MAX_USERNAME_LENGTH} caractères")]
    UsernameTooLong,

    /// Username contains whitespace or control characters.
    #[error("Le nom d'utilisateur contient des caractères invalides")]
    UsernameInvalidChars,

    /// Password is empty.
    #[error("Le mot de passe est requis")]
    PasswordEmpty,

    /// Password is too long.
    #[error("Le mot de passe ne doit pas dépasser {MAX_PASSWORD_LENGTH} octets")]
    PasswordTooLong,
}

impl From<ValidationError> for LentilleError {
    fn from(e: ValidationError) -> Self {
        LentilleError::Validation(e.to_string())
    }
}

/// Validate a username.
///
/// # Examples
///
/// ```
/// use lentille::auth::validation::validate_username;
///
/// assert!(validate_username("alice").is_ok());
/// assert!(validate_username("").is_err());
/// assert!(validate_username("two words").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }
    if username
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ValidationError::UsernameInvalidChars);
    }
    Ok(())
}

/// Validate a password.
///
/// Only emptiness and an upper bound are enforced.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Validate a registration request.
pub fn validate_registration(username: &str, password: &str) -> Result<(), ValidationError> {
    validate_username(username)?;
    validate_password(password)?;
    Ok(())
}
