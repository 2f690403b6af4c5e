//! Domain error types for API operations.
//!
//! Each domain error carries the detail needed for logging. Handlers log
//! that detail and convert the error into an [`ApiError`], which holds only
//! a status code and a user-safe message.

use crate::types::RequestError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// A user-safe API failure, rendered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

/// Area-related errors.
#[derive(Debug)]
pub enum AreaError {
    /// Area was not found.
    NotFound { id: String },
    /// Invalid area ID format.
    InvalidId { id: String, reason: String },
    /// Another area already uses this name.
    DuplicateName { name: String },
    /// Database error while accessing areas.
    DatabaseError { details: String },
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "area '{}' not found", id),
            Self::InvalidId { id, reason } => {
                write!(f, "invalid area id '{}': {}", id, reason)
            }
            Self::DuplicateName { name } => {
                write!(f, "area name '{}' is already in use", name)
            }
            Self::DatabaseError { details } => {
                write!(f, "area database error: {}", details)
            }
        }
    }
}

impl AreaError {
    /// Convert to a user-safe API error.
    pub fn into_api_error(self) -> ApiError {
        match &self {
            AreaError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, "Area not found"),
            AreaError::InvalidId { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "Invalid area ID")
            }
            AreaError::DuplicateName { .. } => {
                ApiError::new(StatusCode::CONFLICT, "Area name already exists")
            }
            AreaError::DatabaseError { .. } => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        }
    }
}

/// Machine-related errors.
#[derive(Debug)]
pub enum MachineError {
    /// Machine was not found.
    NotFound { id: String },
    /// Invalid machine ID format.
    InvalidId { id: String, reason: String },
    /// Another machine already uses this asset number.
    DuplicateAssetNumber { asset_number: String },
    /// Database error while accessing machines.
    DatabaseError { details: String },
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "machine '{}' not found", id),
            Self::InvalidId { id, reason } => {
                write!(f, "invalid machine id '{}': {}", id, reason)
            }
            Self::DuplicateAssetNumber { asset_number } => {
                write!(f, "asset number '{}' is already in use", asset_number)
            }
            Self::DatabaseError { details } => {
                write!(f, "machine database error: {}", details)
            }
        }
    }
}

impl MachineError {
    /// Convert to a user-safe API error.
    pub fn into_api_error(self) -> ApiError {
        match &self {
            MachineError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "Machine not found")
            }
            MachineError::InvalidId { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "Invalid machine ID")
            }
            MachineError::DuplicateAssetNumber { .. } => {
                ApiError::new(StatusCode::CONFLICT, "Asset number already exists")
            }
            MachineError::DatabaseError { .. } => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        }
    }
}

/// Maintenance log-related errors.
#[derive(Debug)]
pub enum MaintenanceLogError {
    /// Log entry was not found.
    NotFound { id: String },
    /// Invalid log ID format.
    InvalidId { id: String, reason: String },
    /// Database error while accessing maintenance logs.
    DatabaseError { details: String },
}

impl fmt::Display for MaintenanceLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "maintenance log '{}' not found", id),
            Self::InvalidId { id, reason } => {
                write!(f, "invalid maintenance log id '{}': {}", id, reason)
            }
            Self::DatabaseError { details } => {
                write!(f, "maintenance log database error: {}", details)
            }
        }
    }
}

impl MaintenanceLogError {
    /// Convert to a user-safe API error.
    pub fn into_api_error(self) -> ApiError {
        match &self {
            MaintenanceLogError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "Maintenance log not found")
            }
            MaintenanceLogError::InvalidId { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "Invalid maintenance log ID")
            }
            MaintenanceLogError::DatabaseError { .. } => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_are_bad_requests() {
        let err = ApiError::from(RequestError::MissingAreaName);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Missing 'area_name' field");
    }

    #[test]
    fn database_detail_is_not_exposed() {
        let err = AreaError::DatabaseError {
            details: "connection refused on 10.0.0.3".to_string(),
        };
        assert!(err.to_string().contains("10.0.0.3"));
        let api = err.into_api_error();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message.contains("10.0.0.3"));
    }

    #[test]
    fn duplicates_are_conflicts() {
        let err = MachineError::DuplicateAssetNumber {
            asset_number: "CH-002".to_string(),
        };
        assert_eq!(err.into_api_error().status, StatusCode::CONFLICT);
    }

    #[test]
    fn missing_log_is_not_found() {
        let err = MaintenanceLogError::NotFound {
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "maintenance log '7' not found");
        assert_eq!(err.into_api_error().status, StatusCode::NOT_FOUND);
    }
}
