//! PostgreSQL-backed store.

use super::GroupStore;
use crate::error::StoreError;
use crate::migration::GROUPS_TABLE;
use crate::model::{Group, NewGroup};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, group_name, arrival, departure";

#[derive(Clone)]
pub struct PgGroupStore {
    pool: PgPool,
}

impl PgGroupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupStore for PgGroupStore {
    async fn find_all(&self) -> Result<Vec<Group>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, GROUPS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Group>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, GROUPS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Group>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, StoreError> {
        let sql = format!(
            "INSERT INTO {} (group_name, arrival, departure) VALUES ($1, $2, $3) RETURNING {}",
            GROUPS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, group_name = %group.group_name, "query");
        let row = sqlx::query_as::<_, Group>(&sql)
            .bind(&group.group_name)
            .bind(group.arrival)
            .bind(group.departure)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, group: &NewGroup) -> Result<Option<Group>, StoreError> {
        let sql = format!(
            "UPDATE {} SET group_name = $2, arrival = $3, departure = $4 WHERE id = $1 RETURNING {}",
            GROUPS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Group>(&sql)
            .bind(id)
            .bind(&group.group_name)
            .bind(group.arrival)
            .bind(group.departure)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", GROUPS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i64,)> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
