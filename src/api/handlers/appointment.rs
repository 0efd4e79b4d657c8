use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CancelAppointmentRequest, CreateAppointmentRequest};
use crate::domain::models::customer::normalize_phone;
use crate::domain::services::booking::{BookingOutcome, CreateAppointmentParams, RecurrenceRule};
use crate::domain::services::calendar::generate_ics;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;
    let start = NaiveTime::parse_from_str(&payload.start_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;

    let recurrence = match payload.recurrence {
        Some(req) => {
            let end_date = match req.end_date {
                Some(ref s) => Some(
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .map_err(|_| AppError::Validation("Invalid recurrence end date".into()))?,
                ),
                None => None,
            };
            Some(RecurrenceRule {
                kind: req.recurrence_type,
                count: req.count,
                end_date,
            })
        }
        None => None,
    };

    info!("create_appointment: venue {} date {} time {}", venue_id, payload.date, payload.start_time);

    let outcome = state
        .booking_service
        .create(CreateAppointmentParams {
            venue_id,
            professional_id: payload.professional_id,
            customer_name: payload.customer_name,
            customer_phone: payload.phone,
            date,
            start,
            service_ids: payload.service_ids,
            recurrence,
        })
        .await?;

    match outcome {
        BookingOutcome::Single(appointment) => Ok(Json(appointment).into_response()),
        BookingOutcome::Series(appointments) => {
            Ok(Json(json!({ "appointments": appointments })).into_response())
        }
    }
}

pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path((venue_id, appointment_id)): Path<(String, String)>,
    Json(payload): Json<CancelAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.phone.trim().is_empty() {
        return Err(AppError::Validation("Phone is required to cancel".into()));
    }

    state
        .booking_service
        .cancel(&venue_id, &appointment_id, &payload.phone, payload.cancel_future)
        .await?;

    Ok(Json(json!({ "status": "cancelled" })))
}

pub async fn list_my_appointments(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let phone = params.get("phone").ok_or(AppError::Validation("phone required".into()))?;
    let clean_phone = normalize_phone(phone);
    if clean_phone.is_empty() {
        return Err(AppError::Validation("phone required".into()));
    }

    let appointments = state
        .appointment_repo
        .list_by_phone(&venue_id, &clean_phone)
        .await?;
    Ok(Json(appointments))
}

pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path((venue_id, appointment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state
        .appointment_repo
        .find_by_id(&venue_id, &appointment_id)
        .await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    let venue = state
        .venue_repo
        .find_by_id(&venue_id)
        .await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    let ics = generate_ics(&venue, &appointment);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=appointment-{}.ics", appointment_id),
            ),
        ],
        ics,
    ))
}
