use crate::domain::{models::professional::Professional, ports::ProfessionalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProfessionalRepo {
    pool: SqlitePool,
}

impl SqliteProfessionalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfessionalRepository for SqliteProfessionalRepo {
    async fn find_by_id(&self, venue_id: &str, id: &str) -> Result<Option<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE venue_id = ? AND id = ?")
            .bind(venue_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, venue_id: &str) -> Result<Vec<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE venue_id = ? AND active = 1 ORDER BY name ASC")
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
