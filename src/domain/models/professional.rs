use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::venue::WeekSchedule;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Professional {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub hours_json: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Professional {
    /// Personal weekly hours. `None` when the professional has no personal
    /// schedule and follows the venue's hours.
    pub fn week_schedule(&self) -> Option<WeekSchedule> {
        self.hours_json
            .as_ref()
            .and_then(|json| serde_json::from_str(json).ok())
    }
}
