use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::service::Service;

pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

/// Copy of a service at booking time, so later catalog edits do not change
/// historical appointments.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceSnapshot {
    pub id: String,
    pub name: String,
    pub duration_min: i32,
    pub price: i64,
}

impl From<&Service> for ServiceSnapshot {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            duration_min: service.duration_min,
            price: service.price,
        }
    }
}

/// `start_time`/`end_time` are venue-local wall-clock instants. The range
/// never changes after creation; rescheduling is cancel + recreate.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: String,
    pub venue_id: String,
    pub professional_id: String,
    pub customer_id: String,
    pub services_json: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub total_price: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub status: String,
    pub recurrence_id: Option<String>,
    pub recurrence_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub venue_id: String,
    pub professional_id: String,
    pub customer_id: String,
    pub services: Vec<ServiceSnapshot>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub recurrence_id: Option<String>,
    pub recurrence_type: Option<String>,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        let total_price = params.services.iter().map(|s| s.price).sum();
        let services_json =
            serde_json::to_string(&params.services).unwrap_or_else(|_| "[]".to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            venue_id: params.venue_id,
            professional_id: params.professional_id,
            customer_id: params.customer_id,
            services_json,
            start_time: params.start_time,
            end_time: params.end_time,
            total_price,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            status: STATUS_CONFIRMED.to_string(),
            recurrence_id: params.recurrence_id,
            recurrence_type: params.recurrence_type,
            created_at: Utc::now(),
        }
    }

    pub fn services(&self) -> Vec<ServiceSnapshot> {
        serde_json::from_str(&self.services_json).unwrap_or_default()
    }
}
