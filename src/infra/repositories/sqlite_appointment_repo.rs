use crate::domain::{models::appointment::Appointment, ports::AppointmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDateTime;

pub struct SqliteAppointmentRepo {
    pool: SqlitePool,
}

impl SqliteAppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepo {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (id, venue_id, professional_id, customer_id, services_json, start_time, end_time, total_price, customer_name, customer_phone, status, recurrence_id, recurrence_type, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&appointment.id).bind(&appointment.venue_id).bind(&appointment.professional_id).bind(&appointment.customer_id)
            .bind(&appointment.services_json).bind(appointment.start_time).bind(appointment.end_time).bind(appointment.total_price)
            .bind(&appointment.customer_name).bind(&appointment.customer_phone).bind(&appointment.status)
            .bind(&appointment.recurrence_id).bind(&appointment.recurrence_type).bind(appointment.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, venue_id: &str, id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE venue_id = ? AND id = ?")
            .bind(venue_id).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_professional(
        &self,
        venue_id: &str,
        professional_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE venue_id = ? AND professional_id = ? AND start_time < ? AND end_time > ? AND status != 'CANCELLED'"
        )
            .bind(venue_id).bind(professional_id).bind(end).bind(start)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_phone(&self, venue_id: &str, phone: &str) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments
             WHERE venue_id = ? AND (customer_phone = ? OR REPLACE(REPLACE(REPLACE(REPLACE(REPLACE(customer_phone, '(', ''), ')', ''), '-', ''), ' ', ''), '+', '') = ?)
               AND status != 'COMPLETED'
             ORDER BY start_time ASC"
        )
            .bind(venue_id).bind(phone).bind(phone)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, venue_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE venue_id = ? AND id = ?")
            .bind(venue_id).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".into()));
        }
        Ok(())
    }

    async fn delete_series_from(
        &self,
        venue_id: &str,
        recurrence_id: &str,
        from: NaiveDateTime,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM appointments WHERE venue_id = ? AND recurrence_id = ? AND start_time >= ?"
        )
            .bind(venue_id).bind(recurrence_id).bind(from)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
