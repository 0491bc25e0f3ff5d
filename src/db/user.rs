//! User model for Lentille.

use serde::Serialize;

/// A registered user.
///
/// Users are created at registration and never modified afterwards.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique, case-sensitive).
    pub username: String,
    /// Password hash (Argon2id PHC string).
    pub password: String,
    /// Registration timestamp.
    pub created_at: String,
}

impl User {
    /// Public view of this user, without the password hash.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Public information about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Password hash (already hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record from a username and a password hash.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password_hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("alice", "$argon2id$hash");
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "$argon2id$hash");
    }

    #[test]
    fn test_summary_omits_password() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password: "$argon2id$hash".to_string(),
            created_at: "2024-01-01 00:00:00.000".to_string(),
        };
        let summary = user.summary();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.username, "alice");
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("argon2"));
    }
}
