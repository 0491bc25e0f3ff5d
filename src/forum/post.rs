//! Post model for Lentille.

use serde::Serialize;

/// A message inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ForumPost {
    /// Unique post ID.
    pub id: i64,
    /// Thread the post belongs to.
    pub thread_id: i64,
    /// ID of the author.
    pub author_id: i64,
    /// Username of the author.
    pub author_name: String,
    /// Post body.
    pub content: String,
    /// Creation timestamp (UTC, millisecond precision).
    pub created_at: String,
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub thread_id: i64,
    pub author_id: i64,
    pub content: String,
}

impl NewPost {
    /// Create a new post with required fields.
    pub fn new(thread_id: i64, author_id: i64, content: impl Into<String>) -> Self {
        Self {
            thread_id,
            author_id,
            content: content.into(),
        }
    }
}
