use crate::domain::models::appointment::Appointment;
use crate::domain::ports::NotificationService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Delivers booking confirmations to the external push gateway. Callers
/// treat delivery as fire-and-forget; errors are surfaced for logging only.
pub struct HttpPushService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpPushService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct PushPayload {
    venue_id: String,
    appointment_id: String,
    title: String,
    body: String,
}

#[async_trait]
impl NotificationService for HttpPushService {
    async fn send_confirmation(&self, appointment: &Appointment) -> Result<(), AppError> {
        let payload = PushPayload {
            venue_id: appointment.venue_id.clone(),
            appointment_id: appointment.id.clone(),
            title: "Appointment confirmed".to_string(),
            body: format!(
                "{} booked {}",
                appointment.customer_name,
                appointment.start_time.format("%Y-%m-%d %H:%M")
            ),
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Push service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Push service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        Ok(())
    }
}
