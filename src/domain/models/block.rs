use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

pub const BLOCK_TYPE_BLOCK: &str = "BLOCK";
pub const BLOCK_TYPE_ARRIVAL_ORDER: &str = "ARRIVAL_ORDER";

/// An administrator-defined time range altering availability. Without a
/// `professional_id` the block applies venue-wide. `BLOCK` removes the
/// range entirely; `ARRIVAL_ORDER` switches it to walk-in service.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Block {
    pub id: String,
    pub venue_id: String,
    pub professional_id: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub block_type: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Block {
    pub fn new(
        venue_id: String,
        professional_id: Option<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        block_type: String,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            professional_id,
            start_time,
            end_time,
            block_type,
            reason,
            created_at: Utc::now(),
        }
    }
}
