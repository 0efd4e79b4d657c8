use crate::domain::{models::block::Block, ports::BlockRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDateTime;

pub struct SqliteBlockRepo {
    pool: SqlitePool,
}

impl SqliteBlockRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockRepository for SqliteBlockRepo {
    async fn create(&self, block: &Block) -> Result<Block, AppError> {
        sqlx::query_as::<_, Block>(
            "INSERT INTO blocks (id, venue_id, professional_id, start_time, end_time, block_type, reason, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&block.id).bind(&block.venue_id).bind(&block.professional_id)
            .bind(block.start_time).bind(block.end_time).bind(&block.block_type)
            .bind(&block.reason).bind(block.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_professional(
        &self,
        venue_id: &str,
        professional_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Block>, AppError> {
        sqlx::query_as::<_, Block>(
            "SELECT * FROM blocks
             WHERE venue_id = ? AND (professional_id = ? OR professional_id IS NULL)
               AND start_time < ? AND end_time > ?"
        )
            .bind(venue_id).bind(professional_id).bind(end).bind(start)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Block>, AppError> {
        sqlx::query_as::<_, Block>("SELECT * FROM blocks WHERE venue_id = ? ORDER BY start_time ASC")
            .bind(venue_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, venue_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blocks WHERE venue_id = ? AND id = ?")
            .bind(venue_id).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Block not found".into()));
        }
        Ok(())
    }
}
