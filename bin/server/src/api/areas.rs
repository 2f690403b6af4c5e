//! Area endpoints.

use super::{ApiState, parse_body};
use crate::db::{AreaRepository, is_unique_violation};
use crate::error::{ApiError, AreaError};
use crate::types::NewArea;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use facilitipro_core::AreaId;
use serde_json::{Value, json};

/// Parses an area ID from a path segment.
pub(super) fn parse_area_id(raw: &str) -> Result<AreaId, ApiError> {
    raw.parse::<AreaId>().map_err(|e| {
        tracing::debug!(area_id = %raw, error = %e, "Invalid area ID format");
        AreaError::InvalidId {
            id: raw.to_string(),
            reason: e.to_string(),
        }
        .into_api_error()
    })
}

/// `GET /api/areas`
pub async fn list_areas(State(state): State<ApiState>) -> Result<Json<Value>, ApiError> {
    let areas = AreaRepository::new(state.pool).list().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list areas");
        AreaError::DatabaseError {
            details: e.to_string(),
        }
        .into_api_error()
    })?;

    Ok(Json(json!({ "areas": areas })))
}

/// `POST /api/areas`
pub async fn create_area(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_area = NewArea::from_json(&parse_body(&body))?;

    let area_id = AreaRepository::new(state.pool)
        .create(&new_area)
        .await
        .map_err(|e| {
            let err = if is_unique_violation(&e) {
                AreaError::DuplicateName {
                    name: new_area.area_name.clone(),
                }
            } else {
                AreaError::DatabaseError {
                    details: e.to_string(),
                }
            };
            tracing::warn!(error = %err, "Failed to create area");
            err.into_api_error()
        })?;

    tracing::info!(area_id = %area_id, area_name = %new_area.area_name, "Created area");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Area added!", "area_id": area_id })),
    ))
}

/// `DELETE /api/areas/{area_id}`
pub async fn delete_area(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let area_id = parse_area_id(&raw_id)?;

    let deleted = AreaRepository::new(state.pool)
        .delete(area_id)
        .await
        .map_err(|e| {
            tracing::error!(area_id = %area_id, error = %e, "Failed to delete area");
            AreaError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    if !deleted {
        tracing::debug!(area_id = %area_id, "Area not found");
        return Err(AreaError::NotFound { id: raw_id }.into_api_error());
    }

    tracing::info!(area_id = %area_id, "Deleted area");
    Ok(Json(json!({ "message": "Area deleted successfully" })))
}
