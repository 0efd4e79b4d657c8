use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::booking::BookingService;
use crate::infra::clock::SystemClock;
use crate::infra::notification::http_push_service::HttpPushService;
use crate::infra::repositories::{
    sqlite_appointment_repo::SqliteAppointmentRepo, sqlite_block_repo::SqliteBlockRepo,
    sqlite_customer_repo::SqliteCustomerRepo, sqlite_professional_repo::SqliteProfessionalRepo,
    sqlite_service_repo::SqliteServiceRepo, sqlite_venue_repo::SqliteVenueRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    let notification_service = Arc::new(HttpPushService::new(
        config.push_service_url.clone(),
        config.push_service_token.clone(),
    ));
    let clock = Arc::new(SystemClock);

    let venue_repo = Arc::new(SqliteVenueRepo::new(pool.clone()));
    let professional_repo = Arc::new(SqliteProfessionalRepo::new(pool.clone()));
    let service_repo = Arc::new(SqliteServiceRepo::new(pool.clone()));
    let appointment_repo = Arc::new(SqliteAppointmentRepo::new(pool.clone()));
    let block_repo = Arc::new(SqliteBlockRepo::new(pool.clone()));
    let customer_repo = Arc::new(SqliteCustomerRepo::new(pool.clone()));

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

    AppState {
        config: config.clone(),
        venue_repo,
        professional_repo,
        service_repo,
        appointment_repo,
        block_repo,
        customer_repo,
        notification_service,
        clock,
        booking_service,
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
