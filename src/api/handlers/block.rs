use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::NaiveDateTime;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateBlockRequest;
use crate::domain::models::block::{Block, BLOCK_TYPE_ARRIVAL_ORDER, BLOCK_TYPE_BLOCK};
use crate::error::AppError;
use crate::state::AppState;

fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::Validation(format!("Invalid datetime: {}", value)))
}

pub async fn create_block(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Json(payload): Json<CreateBlockRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    if let Some(ref professional_id) = payload.professional_id {
        state.professional_repo.find_by_id(&venue_id, professional_id).await?
            .ok_or(AppError::NotFound("Professional not found".into()))?;
    }

    let start_time = parse_local_datetime(&payload.start_time)?;
    let end_time = parse_local_datetime(&payload.end_time)?;
    if end_time <= start_time {
        return Err(AppError::Validation("Block end must be after start".into()));
    }

    let block_type = payload.block_type.unwrap_or_else(|| BLOCK_TYPE_BLOCK.to_string());
    if block_type != BLOCK_TYPE_BLOCK && block_type != BLOCK_TYPE_ARRIVAL_ORDER {
        return Err(AppError::Validation(format!("Unknown block type: {}", block_type)));
    }

    let block = Block::new(
        venue_id,
        payload.professional_id,
        start_time,
        end_time,
        block_type,
        payload.reason,
    );

    let created = state.block_repo.create(&block).await?;
    info!(block_id = %created.id, block_type = %created.block_type, "Block created");
    Ok(Json(created))
}

pub async fn list_blocks(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blocks = state.block_repo.list_by_venue(&venue_id).await?;
    Ok(Json(blocks))
}

pub async fn delete_block(
    State(state): State<Arc<AppState>>,
    Path((venue_id, block_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.block_repo.delete(&venue_id, &block_id).await?;
    info!(block_id = %block_id, "Block removed");
    Ok(Json(json!({ "status": "deleted" })))
}
