use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Strips formatting from a phone number, keeping digits only. All customer
/// lookups and stored phones go through this.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Customer {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub phone: String,
    pub last_appointment: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(venue_id: String, name: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            name,
            phone: normalize_phone(&phone),
            last_appointment: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("(11) 98765-4321"), "11987654321");
        assert_eq!(normalize_phone("+55 11 98765 4321"), "5511987654321");
        assert_eq!(normalize_phone("11987654321"), "11987654321");
    }
}
