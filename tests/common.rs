use salon_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::appointment::Appointment,
    domain::ports::NotificationService,
    domain::services::booking::BookingService,
    error::AppError,
    infra::clock::SystemClock,
    infra::repositories::{
        sqlite_appointment_repo::SqliteAppointmentRepo,
        sqlite_block_repo::SqliteBlockRepo,
        sqlite_customer_repo::SqliteCustomerRepo,
        sqlite_professional_repo::SqliteProfessionalRepo,
        sqlite_service_repo::SqliteServiceRepo,
        sqlite_venue_repo::SqliteVenueRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use uuid::Uuid;

pub struct MockPushService;

#[async_trait]
impl NotificationService for MockPushService {
    async fn send_confirmation(&self, _appointment: &Appointment) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            push_service_url: "http://localhost".to_string(),
            push_service_token: "token".to_string(),
        };

        let venue_repo = Arc::new(SqliteVenueRepo::new(pool.clone()));
        let professional_repo = Arc::new(SqliteProfessionalRepo::new(pool.clone()));
        let service_repo = Arc::new(SqliteServiceRepo::new(pool.clone()));
        let appointment_repo = Arc::new(SqliteAppointmentRepo::new(pool.clone()));
        let block_repo = Arc::new(SqliteBlockRepo::new(pool.clone()));
        let customer_repo = Arc::new(SqliteCustomerRepo::new(pool.clone()));
        let notification_service = Arc::new(MockPushService);
        let clock = Arc::new(SystemClock);

        let booking_service = Arc::new(BookingService::new(
            venue_repo.clone(),
            professional_repo.clone(),
            service_repo.clone(),
            appointment_repo.clone(),
            block_repo.clone(),
            customer_repo.clone(),
            notification_service.clone(),
            clock.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            venue_repo,
            professional_repo,
            service_repo,
            appointment_repo,
            block_repo,
            customer_repo,
            notification_service,
            clock,
            booking_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Venue open every day with the given hours JSON. Notice defaults to
    /// zero so tests control timing explicitly.
    pub async fn seed_venue(
        &self,
        hours_json: &str,
        slot_interval: i32,
        appointment_buffer: i32,
        min_notice_minutes: i32,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO venues (id, name, phone, address, timezone, hours_json, slot_interval, appointment_buffer, min_notice_minutes, max_future_days, created_at)
             VALUES (?, ?, NULL, ?, 'UTC', ?, ?, ?, ?, 365, ?)"
        )
            .bind(&id)
            .bind("Test Venue")
            .bind("Main Street 1")
            .bind(hours_json)
            .bind(slot_interval)
            .bind(appointment_buffer)
            .bind(min_notice_minutes)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to seed venue");
        id
    }

    pub async fn seed_professional(&self, venue_id: &str, hours_json: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO professionals (id, venue_id, name, hours_json, active, created_at)
             VALUES (?, ?, ?, ?, 1, ?)"
        )
            .bind(&id)
            .bind(venue_id)
            .bind("Test Professional")
            .bind(hours_json)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to seed professional");
        id
    }

    pub async fn seed_service(&self, venue_id: &str, name: &str, duration_min: i32, price: i64) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO services (id, venue_id, name, duration_min, price, active, created_at)
             VALUES (?, ?, ?, ?, ?, 1, ?)"
        )
            .bind(&id)
            .bind(venue_id)
            .bind(name)
            .bind(duration_min)
            .bind(price)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to seed service");
        id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

/// Hours JSON with every weekday open for the same window, no breaks.
#[allow(dead_code)]
pub fn full_week_hours(open: &str, close: &str) -> String {
    let day = serde_json::json!({
        "open": open,
        "close": close,
        "is_open": true,
    });
    serde_json::json!({
        "monday": day, "tuesday": day, "wednesday": day, "thursday": day,
        "friday": day, "saturday": day, "sunday": day,
    })
    .to_string()
}

/// A date `days` from today, formatted for the API.
#[allow(dead_code)]
pub fn future_date(days: i64) -> String {
    (Utc::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
