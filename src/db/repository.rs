//! User repository for Lentille.

use super::user::{NewUser, User};
use super::DbPool;
use crate::{LentilleError, Result};

/// Repository for user persistence.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// A username collision (including one lost to a concurrent insert)
    /// is reported as `DuplicateUser`.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (username, password) VALUES (?, ?) RETURNING id")
                .bind(&new_user.username)
                .bind(&new_user.password)
                .fetch_one(self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                        LentilleError::DuplicateUser(new_user.username.clone())
                    }
                    other => LentilleError::from(other),
                })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| LentilleError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by exact username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo.create(&NewUser::new("alice", "hash")).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "hash");
        assert!(!user.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "hash")).await.unwrap();
        let result = repo.create(&NewUser::new("alice", "other")).await;

        assert!(matches!(result, Err(LentilleError::DuplicateUser(name)) if name == "alice"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "hash")).await.unwrap();
        repo.create(&NewUser::new("Alice", "hash")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_and_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let created = repo.create(&NewUser::new("bob", "hash")).await.unwrap();

        let by_id = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "bob");

        let by_name = repo.get_by_username("bob").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(repo.get_by_id(999).await.unwrap().is_none());
        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_exists() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.username_exists("carol").await.unwrap());
        repo.create(&NewUser::new("carol", "hash")).await.unwrap();
        assert!(repo.username_exists("carol").await.unwrap());
    }
}
