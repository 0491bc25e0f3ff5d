//! Catalog repository for Lentille.

use super::types::{EquipmentItem, EquipmentKind, NewEquipmentItem};
use crate::db::DbPool;
use crate::{LentilleError, Result};

/// Repository for camera and telescope rows.
pub struct CatalogRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new CatalogRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// List every item of a kind in insertion order.
    pub async fn list_items(&self, kind: EquipmentKind) -> Result<Vec<EquipmentItem>> {
        let sql = format!(
            "SELECT id, brand, model, release_date, score, category, summary
             FROM {} ORDER BY id",
            kind.table()
        );
        let items = sqlx::query_as::<_, EquipmentItem>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(items)
    }

    /// Get one item, failing with `NotFound` when absent.
    pub async fn get_item(&self, kind: EquipmentKind, id: i64) -> Result<EquipmentItem> {
        let sql = format!(
            "SELECT id, brand, model, release_date, score, category, summary
             FROM {} WHERE id = ?",
            kind.table()
        );
        sqlx::query_as::<_, EquipmentItem>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| LentilleError::NotFound(kind.to_string()))
    }

    /// Insert an item and return it with its assigned ID.
    pub async fn create_item(
        &self,
        kind: EquipmentKind,
        item: &NewEquipmentItem,
    ) -> Result<EquipmentItem> {
        let sql = format!(
            "INSERT INTO {} (brand, model, release_date, score, category, summary)
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
            kind.table()
        );
        let id: i64 = sqlx::query_scalar(&sql)
            .bind(&item.brand)
            .bind(&item.model)
            .bind(&item.release_date)
            .bind(item.score)
            .bind(&item.category)
            .bind(&item.summary)
            .fetch_one(self.pool)
            .await?;

        self.get_item(kind, id).await
    }

    /// Count the items of a kind.
    pub async fn count(&self, kind: EquipmentKind) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(self.pool).await?;
        Ok(count)
    }
}
