use crate::domain::{models::customer::Customer, ports::CustomerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCustomerRepo {
    pool: SqlitePool,
}

impl SqliteCustomerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepo {
    async fn find_by_phone(
        &self,
        venue_id: &str,
        clean_phone: &str,
        raw_phone: &str,
    ) -> Result<Option<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers WHERE venue_id = ? AND (phone = ? OR phone = ?)"
        )
            .bind(venue_id).bind(clean_phone).bind(raw_phone)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (id, venue_id, name, phone, last_appointment, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&customer.id).bind(&customer.venue_id).bind(&customer.name)
            .bind(&customer.phone).bind(customer.last_appointment).bind(customer.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = ?, phone = ?, last_appointment = ?
             WHERE id = ? AND venue_id = ?
             RETURNING *"
        )
            .bind(&customer.name).bind(&customer.phone).bind(customer.last_appointment)
            .bind(&customer.id).bind(&customer.venue_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
