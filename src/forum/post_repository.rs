//! Post repository for Lentille.

use sqlx::{Executor, Sqlite};

use super::post::{ForumPost, NewPost};
use crate::db::DbPool;
use crate::Result;

/// Repository for forum posts.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a post row on any executor and return its ID.
    pub async fn insert<'e, E>(executor: E, new_post: &NewPost) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO forum_posts (thread_id, author_id, content) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_post.thread_id)
        .bind(new_post.author_id)
        .bind(&new_post.content)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// List posts of a thread, oldest first.
    pub async fn list_by_thread(&self, thread_id: i64) -> Result<Vec<ForumPost>> {
        let posts = sqlx::query_as::<_, ForumPost>(
            "SELECT p.id, p.thread_id, p.author_id, u.username AS author_name, p.content, p.created_at
             FROM forum_posts p
             JOIN users u ON u.id = p.author_id
             WHERE p.thread_id = ?
             ORDER BY p.created_at ASC, p.id ASC",
        )
        .bind(thread_id)
        .fetch_all(self.pool)
        .await?;
        Ok(posts)
    }

    /// Count posts in a thread.
    pub async fn count_by_thread(&self, thread_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forum_posts WHERE thread_id = ?")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
