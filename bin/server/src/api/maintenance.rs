//! Maintenance log endpoints, nested under their machine.

use super::machines::parse_machine_id;
use super::{ApiState, parse_body};
use crate::db::{MaintenanceLogRepository, is_foreign_key_violation};
use crate::error::{ApiError, MachineError, MaintenanceLogError};
use crate::types::NewMaintenanceLog;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use facilitipro_core::MaintenanceLogId;
use serde_json::{Value, json};

/// `GET /api/machines/{machine_id}/maintenance`
pub async fn list_logs(
    State(state): State<ApiState>,
    Path(raw_machine_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let machine_id = parse_machine_id(&raw_machine_id)?;

    let logs = MaintenanceLogRepository::new(state.pool)
        .list_by_machine(machine_id)
        .await
        .map_err(|e| {
            tracing::error!(machine_id = %machine_id, error = %e, "Failed to list maintenance logs");
            MaintenanceLogError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    Ok(Json(json!({ "logs": logs })))
}

/// `POST /api/machines/{machine_id}/maintenance`
pub async fn create_log(
    State(state): State<ApiState>,
    Path(raw_machine_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let machine_id = parse_machine_id(&raw_machine_id)?;
    let new_log = NewMaintenanceLog::from_json(&parse_body(&body))?;

    let log_id = MaintenanceLogRepository::new(state.pool)
        .create(machine_id, &new_log)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                tracing::debug!(machine_id = %machine_id, "Log recorded for unknown machine");
                return MachineError::NotFound {
                    id: raw_machine_id.clone(),
                }
                .into_api_error();
            }
            tracing::error!(machine_id = %machine_id, error = %e, "Failed to record maintenance log");
            MaintenanceLogError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    tracing::info!(
        machine_id = %machine_id,
        log_id = %log_id,
        technician = %new_log.technician_name,
        hours = new_log.total_time_spent,
        "Recorded maintenance log"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Maintenance log added!", "log_id": log_id })),
    ))
}

/// `DELETE /api/maintenance/{log_id}`
pub async fn delete_log(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let log_id = raw_id.parse::<MaintenanceLogId>().map_err(|e| {
        tracing::debug!(log_id = %raw_id, error = %e, "Invalid maintenance log ID format");
        MaintenanceLogError::InvalidId {
            id: raw_id.clone(),
            reason: e.to_string(),
        }
        .into_api_error()
    })?;

    let deleted = MaintenanceLogRepository::new(state.pool)
        .delete(log_id)
        .await
        .map_err(|e| {
            tracing::error!(log_id = %log_id, error = %e, "Failed to delete maintenance log");
            MaintenanceLogError::DatabaseError {
                details: e.to_string(),
            }
            .into_api_error()
        })?;

    if !deleted {
        tracing::debug!(log_id = %log_id, "Maintenance log not found");
        return Err(MaintenanceLogError::NotFound { id: raw_id }.into_api_error());
    }

    tracing::info!(log_id = %log_id, "Deleted maintenance log");
    Ok(Json(json!({ "message": "Maintenance log deleted successfully" })))
}
