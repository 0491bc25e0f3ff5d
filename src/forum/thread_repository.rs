//! Thread repository for Lentille.

use sqlx::{Executor, Sqlite};

use super::thread::{ForumThread, NewThread};
use crate::db::DbPool;
use crate::Result;

const SELECT_THREAD: &str = "
    SELECT t.id, t.category_id, t.author_id, u.username AS author_name, t.title, t.created_at,
           (SELECT COUNT(*) FROM forum_posts p WHERE p.thread_id = t.id) AS post_count
    FROM forum_threads t
    JOIN users u ON u.id = t.author_id";

/// Repository for forum threads.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a thread row on any executor and return its ID.
    ///
    /// Used directly inside transactions.
    pub async fn insert<'e, E>(executor: E, new_thread: &NewThread) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO forum_threads (category_id, author_id, title) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_thread.category_id)
        .bind(new_thread.author_id)
        .bind(&new_thread.title)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// Get a thread by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ForumThread>> {
        let sql = format!("{SELECT_THREAD} WHERE t.id = ?");
        let thread = sqlx::query_as::<_, ForumThread>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(thread)
    }

    /// List threads of a category, newest first.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<ForumThread>> {
        let sql = format!(
            "{SELECT_THREAD} WHERE t.category_id = ? ORDER BY t.created_at DESC, t.id DESC"
        );
        let threads = sqlx::query_as::<_, ForumThread>(&sql)
            .bind(category_id)
            .fetch_all(self.pool)
            .await?;
        Ok(threads)
    }

    /// Count threads in a category.
    pub async fn count_by_category(&self, category_id: i64) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM forum_threads WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(self.pool)
                .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, UserRepository};
    use crate::forum::CategoryRepository;
    use crate::Database;

    async fn setup() -> (Database, i64, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let user = UserRepository::new(db.pool())
            .create(&NewUser::new("alice", "hash"))
            .await
            .unwrap();
        let category = CategoryRepository::new(db.pool())
            .create("Télescopes")
            .await
            .unwrap();
        (db, user.id, category.id)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let (db, user_id, category_id) = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let id = ThreadRepository::insert(db.pool(), &NewThread::new(category_id, "Collimation", user_id))
            .await
            .unwrap();

        let thread = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(thread.title, "Collimation");
        assert_eq!(thread.author_name, "alice");
        assert_eq!(thread.post_count, 0);
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (db, user_id, category_id) = setup().await;
        let repo = ThreadRepository::new(db.pool());

        for title in ["premier", "deuxième", "troisième"] {
            ThreadRepository::insert(db.pool(), &NewThread::new(category_id, title, user_id))
                .await
                .unwrap();
        }

        let titles: Vec<_> = repo
            .list_by_category(category_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["troisième", "deuxième", "premier"]);
        assert_eq!(repo.count_by_category(category_id).await.unwrap(), 3);
    }
}
