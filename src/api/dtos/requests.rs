use serde::Deserialize;

use crate::domain::services::recurrence::RecurrenceType;

#[derive(Deserialize)]
pub struct RecurrenceRequest {
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    pub count: Option<u32>,
    pub end_date: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub professional_id: String,
    pub customer_name: String,
    pub phone: String,
    pub date: String,
    pub start_time: String,
    pub service_ids: Vec<String>,
    pub recurrence: Option<RecurrenceRequest>,
}

#[derive(Deserialize)]
pub struct CancelAppointmentRequest {
    pub phone: String,
    #[serde(default)]
    pub cancel_future: bool,
}

#[derive(Deserialize)]
pub struct CreateBlockRequest {
    pub professional_id: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub block_type: Option<String>,
    pub reason: Option<String>,
}
