use crate::domain::models::{
    appointment::Appointment, block::Block, customer::Customer,
    professional::Professional, service::Service, venue::Venue,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError>;
}

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn find_by_id(&self, venue_id: &str, id: &str) -> Result<Option<Professional>, AppError>;
    async fn list(&self, venue_id: &str) -> Result<Vec<Professional>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_by_ids(&self, venue_id: &str, ids: &[String]) -> Result<Vec<Service>, AppError>;
    async fn list(&self, venue_id: &str) -> Result<Vec<Service>, AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn find_by_id(&self, venue_id: &str, id: &str) -> Result<Option<Appointment>, AppError>;
    /// Non-cancelled appointments for one professional overlapping the window.
    async fn list_for_professional(
        &self,
        venue_id: &str,
        professional_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_phone(&self, venue_id: &str, phone: &str) -> Result<Vec<Appointment>, AppError>;
    async fn delete(&self, venue_id: &str, id: &str) -> Result<(), AppError>;
    /// Removes every occurrence of a recurrence series starting at or after `from`.
    async fn delete_series_from(
        &self,
        venue_id: &str,
        recurrence_id: &str,
        from: NaiveDateTime,
    ) -> Result<u64, AppError>;
}

#[async_trait]
pub trait BlockRepository: Send + Sync {
    async fn create(&self, block: &Block) -> Result<Block, AppError>;
    /// Blocks scoped to the professional plus venue-wide blocks, overlapping the window.
    async fn list_for_professional(
        &self,
        venue_id: &str,
        professional_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Block>, AppError>;
    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Block>, AppError>;
    async fn delete(&self, venue_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Lookup by normalized phone, with a fallback on the raw form for
    /// records created before normalization was enforced.
    async fn find_by_phone(
        &self,
        venue_id: &str,
        clean_phone: &str,
        raw_phone: &str,
    ) -> Result<Option<Customer>, AppError>;
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError>;
    async fn update(&self, customer: &Customer) -> Result<Customer, AppError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Fire-and-forget booking confirmation. Callers must not fail the
    /// booking when this errors.
    async fn send_confirmation(&self, appointment: &Appointment) -> Result<(), AppError>;
}

/// Injected time source so scheduling computations never read a global clock.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}
