//! Machine endpoints, nested under their area.

use super::areas::parse_area_id;
use super::{ApiState, parse_body};
use crate::db::{MachineRepository, is_foreign_key_violation, is_unique_violation};
use crate::error::{ApiError, AreaError, MachineError};
use crate::types::NewMachine;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use facilitipro_core::MachineId;
use serde_json::{Value, json};

/// Parses a machine ID from a path segment.
pub(super) fn parse_machine_id(raw: &str) -> Result<MachineId, ApiError> {
    raw.parse::<MachineId>().map_err(|e| {
        tracing::debug!(machine_id = %raw, error = %e, "Invalid machine ID format");
        MachineError::InvalidId {
            id: raw.to_string(),
            reason: e.to_string(),
        }
        .into_api_error()
    })
}

/// `GET /api/areas/{area_id}/machines`
pub async fn list_machines(
    State(state): State<ApiState>,
    Path(raw_area_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let area_id = parse_area_id(&raw_area_id)?;

    let machines = MachineRepository::new(state.pool)
        .list_by_area(area_id)
        .await
        .map_err(|e| {
            tracing::error!(area_id = %area_id, error = %e, "Failed to list machines");
            MachineError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    Ok(Json(json!({ "machines": machines })))
}

/// `POST /api/areas/{area_id}/machines`
pub async fn create_machine(
    State(state): State<ApiState>,
    Path(raw_area_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let area_id = parse_area_id(&raw_area_id)?;
    let new_machine = NewMachine::from_json(&parse_body(&body))?;

    let machine_id = MachineRepository::new(state.pool)
        .create(area_id, &new_machine)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                tracing::debug!(area_id = %area_id, "Machine created under unknown area");
                return AreaError::NotFound { id: raw_area_id.clone() }.into_api_error();
            }
            let err = if is_unique_violation(&e) {
                MachineError::DuplicateAssetNumber {
                    asset_number: new_machine.asset_number.clone(),
                }
            } else {
                MachineError::DatabaseError {
                    details: e.to_string(),
                }
            };
            tracing::warn!(area_id = %area_id, error = %err, "Failed to create machine");
            err.into_api_error()
        })?;

    tracing::info!(
        area_id = %area_id,
        machine_id = %machine_id,
        asset_number = %new_machine.asset_number,
        "Created machine"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Machine added!", "machine_id": machine_id })),
    ))
}

/// `DELETE /api/machines/{machine_id}`
pub async fn delete_machine(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let machine_id = parse_machine_id(&raw_id)?;

    let deleted = MachineRepository::new(state.pool)
        .delete(machine_id)
        .await
        .map_err(|e| {
            tracing::error!(machine_id = %machine_id, error = %e, "Failed to delete machine");
            MachineError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    if !deleted {
        tracing::debug!(machine_id = %machine_id, "Machine not found");
        return Err(MachineError::NotFound { id: raw_id }.into_api_error());
    }

    tracing::info!(machine_id = %machine_id, "Deleted machine");
    Ok(Json(json!({ "message": "Machine deleted successfully" })))
}
