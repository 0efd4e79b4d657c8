use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bookable service. `price` is in cents.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub duration_min: i32,
    pub price: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
