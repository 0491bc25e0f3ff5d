//! Thread model for Lentille.

use serde::Serialize;

/// A discussion thread, with its author's name and post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ForumThread {
    /// Unique thread ID.
    pub id: i64,
    /// Category the thread belongs to.
    pub category_id: i64,
    /// ID of the user who opened the thread.
    pub author_id: i64,
    /// Username of the author.
    pub author_name: String,
    /// Thread title.
    pub title: String,
    /// Creation timestamp (UTC, millisecond precision).
    pub created_at: String,
    /// Number of posts, the opening post included.
    pub post_count: i64,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Category to create the thread in.
    pub category_id: i64,
    /// Thread title.
    pub title: String,
    /// ID of the user creating the thread.
    pub author_id: i64,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(category_id: i64, title: impl Into<String>, author_id: i64) -> Self {
        Self {
            category_id,
            title: title.into(),
            author_id,
        }
    }
}
