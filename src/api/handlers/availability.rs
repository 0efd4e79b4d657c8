use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::responses::{ArrivalOrderResponse, SlotsResponse};
use crate::domain::services::schedule::resolve_day;
use crate::domain::services::slots::{generate_slots, DayAvailability};
use crate::error::AppError;
use crate::state::AppState;

/// Bookable start times for one professional, date, and service selection.
/// Arrival-order days answer with `{"arrival_order": true}` instead of a
/// slot list so callers can present walk-in service, not "fully booked".
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let professional_id = params
        .get("professional_id")
        .ok_or(AppError::Validation("professional_id required".into()))?;
    let service_ids_str = params
        .get("service_ids")
        .ok_or(AppError::Validation("service_ids required".into()))?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let service_ids: Vec<String> = service_ids_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if service_ids.is_empty() {
        return Err(AppError::Validation("service_ids required".into()));
    }

    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    let professional = state.professional_repo.find_by_id(&venue_id, professional_id).await?
        .ok_or(AppError::NotFound("Professional not found".into()))?;

    let services = state.service_repo.find_by_ids(&venue_id, &service_ids).await?;
    for id in &service_ids {
        if !services.iter().any(|s| &s.id == id) {
            return Err(AppError::Validation(format!("Service not found: {}", id)));
        }
    }
    let total_duration: i64 = services.iter().map(|s| s.duration_min as i64).sum();

    info!(
        venue_id = %venue_id,
        professional_id = %professional.id,
        date = %date,
        total_duration,
        "Availability check"
    );

    let day_start = date.and_hms_opt(0, 0, 0).expect("midnight exists");
    let day_end = day_start + Duration::days(1);

    let appointments = state
        .appointment_repo
        .list_for_professional(&venue_id, &professional.id, day_start, day_end)
        .await?;
    let blocks = state
        .block_repo
        .list_for_professional(&venue_id, &professional.id, day_start, day_end)
        .await?;

    let venue_hours = venue.week_schedule();
    let pro_hours = professional.week_schedule();
    let day = resolve_day(&venue_hours, pro_hours.as_ref(), date)?;

    let tz: Tz = venue.timezone.parse().unwrap_or(chrono_tz::UTC);
    let now_local = state.clock.now_utc().with_timezone(&tz).naive_local();

    let availability = generate_slots(
        day.as_ref(),
        date,
        &venue.settings(),
        total_duration,
        &appointments,
        &blocks,
        now_local,
    );

    match availability {
        DayAvailability::ArrivalOrder => {
            Ok(Json(ArrivalOrderResponse { arrival_order: true }).into_response())
        }
        DayAvailability::Slots(slots) => Ok(Json(SlotsResponse {
            date: date.format("%Y-%m-%d").to_string(),
            slots: slots.iter().map(|t| t.format("%H:%M").to_string()).collect(),
        })
        .into_response()),
    }
}
