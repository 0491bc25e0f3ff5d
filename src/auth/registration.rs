//! User registration for Lentille.

use tracing::info;

use crate::auth::hash_password_blocking;
use crate::auth::validation::validate_registration;
use crate::db::{NewUser, UserRepository};
use crate::{LentilleError, Result};

/// Register a new user and return its ID.
///
/// 1. Validates username and password (non-empty, bounded length)
/// 2. Rejects an existing username with `DuplicateUser`
/// 3. Hashes the password with a random salt
/// 4. Persists the user
///
/// The username is stored exactly as given.
pub async fn register(repo: &UserRepository<'_>, username: &str, password: &str) -> Result<i64> {
    validate_registration(username, password)?;

    if repo.username_exists(username).await? {
        return Err(LentilleError::DuplicateUser(username.to_string()));
    }

    let password_hash = hash_password_blocking(password).await?;
    let user = repo.create(&NewUser::new(username, password_hash)).await?;

    info!(
        username = %user.username,
        user_id = user.id,
        "New user registered"
    );

    Ok(user.id)
}
