//! Forum service for Lentille.
//!
//! High-level operations over categories, threads and posts with input
//! validation and existence checks.

use tracing::{debug, info};

use crate::db::DbPool;
use crate::{LentilleError, Result};

use super::post::{ForumPost, NewPost};
use super::post_repository::PostRepository;
use super::repository::CategoryRepository;
use super::thread::{ForumThread, NewThread};
use super::thread_repository::ThreadRepository;
use super::types::ForumCategory;

/// Maximum length for thread titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Validate a thread title.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(LentilleError::Validation(
            "Le titre est requis".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(LentilleError::Validation(format!(
            "Le titre ne doit pas dépasser {} caractères",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validate a post body.
fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(LentilleError::Validation(
            "Le message est requis".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(LentilleError::Validation(format!(
            "Le message ne doit pas dépasser {} caractères",
            MAX_CONTENT_LENGTH
        )));
    }
    Ok(())
}

/// Forum operations bound to a connection pool.
pub struct ForumService<'a> {
    pool: &'a DbPool,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// List all categories in storage order.
    pub async fn list_categories(&self) -> Result<Vec<ForumCategory>> {
        CategoryRepository::new(self.pool).list().await
    }

    /// Get a category, failing with `NotFound` when absent.
    pub async fn get_category(&self, category_id: i64) -> Result<ForumCategory> {
        CategoryRepository::new(self.pool)
            .get_by_id(category_id)
            .await?
            .ok_or_else(|| LentilleError::NotFound("category".to_string()))
    }

    /// Get a thread, failing with `NotFound` when absent.
    pub async fn get_thread(&self, thread_id: i64) -> Result<ForumThread> {
        ThreadRepository::new(self.pool)
            .get_by_id(thread_id)
            .await?
            .ok_or_else(|| LentilleError::NotFound("thread".to_string()))
    }

    /// List the threads of a category, newest first.
    pub async fn list_threads(&self, category_id: i64) -> Result<Vec<ForumThread>> {
        self.get_category(category_id).await?;
        ThreadRepository::new(self.pool)
            .list_by_category(category_id)
            .await
    }

    /// List the posts of a thread, oldest first.
    pub async fn list_posts(&self, thread_id: i64) -> Result<Vec<ForumPost>> {
        self.get_thread(thread_id).await?;
        PostRepository::new(self.pool).list_by_thread(thread_id).await
    }

    /// Open a thread with its first post.
    ///
    /// Both rows are written in one transaction. Returns the thread ID.
    pub async fn create_thread(
        &self,
        category_id: i64,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<i64> {
        validate_title(title)?;
        validate_content(content)?;
        self.get_category(category_id).await?;

        let mut tx = self.pool.begin().await?;
        let thread_id =
            ThreadRepository::insert(&mut *tx, &NewThread::new(category_id, title, user_id))
                .await?;
        PostRepository::insert(&mut *tx, &NewPost::new(thread_id, user_id, content)).await?;
        tx.commit().await?;

        info!(
            thread_id,
            category_id,
            user_id,
            "Thread created"
        );
        Ok(thread_id)
    }

    /// Add a post to an existing thread. Returns the post ID.
    pub async fn reply(&self, thread_id: i64, user_id: i64, content: &str) -> Result<i64> {
        validate_content(content)?;
        self.get_thread(thread_id).await?;

        let post_id =
            PostRepository::insert(self.pool, &NewPost::new(thread_id, user_id, content)).await?;

        debug!(post_id, thread_id, user_id, "Reply posted");
        Ok(post_id)
    }

    /// Create every category name that does not exist yet.
    ///
    /// Returns the number of categories created.
    pub async fn ensure_categories<S: AsRef<str>>(&self, names: &[S]) -> Result<usize> {
        let repo = CategoryRepository::new(self.pool);
        let mut created = 0;
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || repo.get_by_name(name).await?.is_some() {
                continue;
            }
            repo.create(name).await?;
            created += 1;
        }
        if created > 0 {
            info!(created, "Forum categories created");
        }
        Ok(created)
    }
}
