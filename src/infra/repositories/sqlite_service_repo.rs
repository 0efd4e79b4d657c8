use crate::domain::{models::service::Service, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteServiceRepo {
    pool: SqlitePool,
}

impl SqliteServiceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn find_by_ids(&self, venue_id: &str, ids: &[String]) -> Result<Vec<Service>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // sqlx has no array binding for SQLite; build the placeholder list.
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT * FROM services WHERE venue_id = ? AND id IN ({})",
            placeholders
        );

        let mut query = sqlx::query_as::<_, Service>(&sql).bind(venue_id);
        for id in ids {
            query = query.bind(id);
        }

        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, venue_id: &str) -> Result<Vec<Service>, AppError> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE venue_id = ? AND active = 1 ORDER BY name ASC")
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
