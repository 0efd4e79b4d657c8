use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dtos::responses::CustomerCheckResponse;
use crate::domain::models::customer::normalize_phone;
use crate::error::AppError;
use crate::state::AppState;

/// Greets returning customers in the guided flow: found + name, or not.
pub async fn check_customer(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let phone = params.get("phone").ok_or(AppError::Validation("phone required".into()))?;
    let clean_phone = normalize_phone(phone);
    if clean_phone.is_empty() {
        return Err(AppError::Validation("phone required".into()));
    }

    let customer = state
        .customer_repo
        .find_by_phone(&venue_id, &clean_phone, phone)
        .await?;

    match customer {
        Some(customer) => Ok(Json(CustomerCheckResponse {
            found: true,
            name: Some(customer.name),
        })),
        None => Ok(Json(CustomerCheckResponse { found: false, name: None })),
    }
}
