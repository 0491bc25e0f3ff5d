//! Category repository for Lentille.

use super::types::ForumCategory;
use crate::db::DbPool;
use crate::Result;

/// Repository for forum categories.
pub struct CategoryRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new CategoryRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a category and return it.
    pub async fn create(&self, name: &str) -> Result<ForumCategory> {
        let category = sqlx::query_as::<_, ForumCategory>(
            "INSERT INTO forum_categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;
        Ok(category)
    }

    /// Get a category by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ForumCategory>> {
        let category =
            sqlx::query_as::<_, ForumCategory>("SELECT id, name FROM forum_categories WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;
        Ok(category)
    }

    /// Get a category by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ForumCategory>> {
        let category = sqlx::query_as::<_, ForumCategory>(
            "SELECT id, name FROM forum_categories WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;
        Ok(category)
    }

    /// List all categories in storage order.
    pub async fn list(&self) -> Result<Vec<ForumCategory>> {
        let categories =
            sqlx::query_as::<_, ForumCategory>("SELECT id, name FROM forum_categories ORDER BY id")
                .fetch_all(self.pool)
                .await?;
        Ok(categories)
    }
}
