//! Forum category model for Lentille.

use serde::Serialize;

/// A forum category grouping threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ForumCategory {
    /// Unique category ID.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}
