//! Shared types for the maintenance API.
//!
//! Response records serialize with the field names the API has always
//! used. Request bodies are validated from raw JSON so missing fields
//! produce the API's own error messages instead of a deserializer error.

use facilitipro_core::{AreaId, MachineId, MaintenanceLogId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A facility area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaInfo {
    pub area_id: AreaId,
    pub area_name: String,
}

/// A machine, as listed under its area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineInfo {
    pub machine_id: MachineId,
    pub machine_name: String,
    pub asset_number: String,
    pub location: String,
    pub last_maintenance_date: String,
}

/// A maintenance log entry, as listed under its machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLogInfo {
    pub log_id: MaintenanceLogId,
    pub technician_name: String,
    pub date: String,
    pub total_time_spent: f64,
    pub comments: String,
    /// JSON text describing the parts used.
    pub parts_used: String,
}

/// Validation failures for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Area creation without an `area_name`.
    MissingAreaName,
    /// Machine or log creation without one of its required fields.
    MissingRequiredFields,
    /// A text field longer than its column allows.
    FieldTooLong { field: &'static str, max: usize },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAreaName => write!(f, "Missing 'area_name' field"),
            Self::MissingRequiredFields => write!(f, "Missing required fields"),
            Self::FieldTooLong { field, max } => {
                write!(f, "'{field}' must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Body of `POST /api/areas`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewArea {
    pub area_name: String,
}

impl NewArea {
    /// Validates a request body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingAreaName`] unless `area_name` is a string,
    /// and [`RequestError::FieldTooLong`] if it exceeds 100 characters.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let area_name = required_text(body, "area_name").ok_or(RequestError::MissingAreaName)?;
        check_length("area_name", &area_name, 100)?;
        Ok(Self { area_name })
    }
}

/// Body of `POST /api/areas/{area_id}/machines`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMachine {
    pub machine_name: String,
    pub asset_number: String,
    pub location: String,
    pub last_maintenance_date: String,
}

impl NewMachine {
    /// Validates a request body.
    ///
    /// `machine_name` and `asset_number` are required; `location` and
    /// `last_maintenance_date` default to empty.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingRequiredFields`] if a required field is absent,
    /// and [`RequestError::FieldTooLong`] if any field exceeds its column.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let machine_name =
            required_text(body, "machine_name").ok_or(RequestError::MissingRequiredFields)?;
        let asset_number =
            required_text(body, "asset_number").ok_or(RequestError::MissingRequiredFields)?;
        let location = optional_text(body, "location", "");
        let last_maintenance_date = optional_text(body, "last_maintenance_date", "");

        check_length("machine_name", &machine_name, 100)?;
        check_length("asset_number", &asset_number, 50)?;
        check_length("location", &location, 255)?;
        check_length("last_maintenance_date", &last_maintenance_date, 50)?;

        Ok(Self {
            machine_name,
            asset_number,
            location,
            last_maintenance_date,
        })
    }
}

/// Body of `POST /api/machines/{machine_id}/maintenance`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMaintenanceLog {
    pub technician_name: String,
    pub total_time_spent: f64,
    pub comments: String,
    pub parts_used: String,
}

impl NewMaintenanceLog {
    /// Validates a request body.
    ///
    /// `total_time_spent` may be a JSON number or a numeric string.
    /// `parts_used` is stored as JSON text and defaults to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingRequiredFields`] if `technician_name`
    /// or a numeric `total_time_spent` is absent, and
    /// [`RequestError::FieldTooLong`] if `technician_name` exceeds 100 characters.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let technician_name =
            required_text(body, "technician_name").ok_or(RequestError::MissingRequiredFields)?;
        check_length("technician_name", &technician_name, 100)?;
        let total_time_spent = match body.get("total_time_spent") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|hours| hours.is_finite())
        .ok_or(RequestError::MissingRequiredFields)?;

        Ok(Self {
            technician_name,
            total_time_spent,
            comments: optional_text(body, "comments", ""),
            parts_used: optional_text(body, "parts_used", "{}"),
        })
    }
}

fn required_text(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Limits mirror the `VARCHAR` columns in the facilities migration.
fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), RequestError> {
    if value.chars().count() > max {
        return Err(RequestError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Strings pass through; other JSON values are kept as JSON text.
fn optional_text(body: &Value, key: &str, default: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_area_requires_name() {
        assert_eq!(
            NewArea::from_json(&json!({})),
            Err(RequestError::MissingAreaName)
        );
        assert_eq!(
            NewArea::from_json(&json!(null)),
            Err(RequestError::MissingAreaName)
        );
        let area = NewArea::from_json(&json!({"area_name": "Boiler Room"})).expect("valid");
        assert_eq!(area.area_name, "Boiler Room");
    }

    #[test]
    fn request_error_messages() {
        assert_eq!(
            RequestError::MissingAreaName.to_string(),
            "Missing 'area_name' field"
        );
        assert_eq!(
            RequestError::MissingRequiredFields.to_string(),
            "Missing required fields"
        );
    }

    #[test]
    fn new_machine_defaults_optional_fields() {
        let machine = NewMachine::from_json(&json!({
            "machine_name": "Chiller 2",
            "asset_number": "CH-002",
        }))
        .expect("valid");
        assert_eq!(machine.location, "");
        assert_eq!(machine.last_maintenance_date, "");
    }

    #[test]
    fn new_machine_requires_asset_number() {
        let result = NewMachine::from_json(&json!({"machine_name": "Chiller 2"}));
        assert_eq!(result, Err(RequestError::MissingRequiredFields));
    }

    #[test]
    fn text_fields_are_limited_to_their_columns() {
        let name = "x".repeat(100);
        assert!(NewArea::from_json(&json!({ "area_name": name })).is_ok());
        let name = "x".repeat(101);
        assert_eq!(
            NewArea::from_json(&json!({ "area_name": name })),
            Err(RequestError::FieldTooLong {
                field: "area_name",
                max: 100
            })
        );

        let machine = NewMachine::from_json(&json!({
            "machine_name": "Chiller 2",
            "asset_number": "A".repeat(51),
        }));
        assert_eq!(
            machine,
            Err(RequestError::FieldTooLong {
                field: "asset_number",
                max: 50
            })
        );

        let log = NewMaintenanceLog::from_json(&json!({
            "technician_name": "t".repeat(101),
            "total_time_spent": 1,
        }));
        assert_eq!(
            log,
            Err(RequestError::FieldTooLong {
                field: "technician_name",
                max: 100
            })
        );
    }

    #[test]
    fn length_limit_counts_characters() {
        let name = "é".repeat(100);
        assert!(NewArea::from_json(&json!({ "area_name": name })).is_ok());
        assert_eq!(
            RequestError::FieldTooLong {
                field: "location",
                max: 255
            }
            .to_string(),
            "'location' must be at most 255 characters"
        );
    }

    #[test]
    fn new_log_accepts_numeric_string_hours() {
        let log = NewMaintenanceLog::from_json(&json!({
            "technician_name": "Sam",
            "total_time_spent": "1.5",
        }))
        .expect("valid");
        assert_eq!(log.total_time_spent, 1.5);
        assert_eq!(log.comments, "");
        assert_eq!(log.parts_used, "{}");
    }

    #[test]
    fn new_log_keeps_structured_parts_as_json_text() {
        let log = NewMaintenanceLog::from_json(&json!({
            "technician_name": "Sam",
            "total_time_spent": 2,
            "parts_used": {"filter": 1},
        }))
        .expect("valid");
        assert_eq!(log.total_time_spent, 2.0);
        assert_eq!(log.parts_used, r#"{"filter":1}"#);
    }

    #[test]
    fn new_log_requires_hours() {
        let missing = NewMaintenanceLog::from_json(&json!({"technician_name": "Sam"}));
        assert_eq!(missing, Err(RequestError::MissingRequiredFields));

        let garbage = NewMaintenanceLog::from_json(&json!({
            "technician_name": "Sam",
            "total_time_spent": "soon",
        }));
        assert_eq!(garbage, Err(RequestError::MissingRequiredFields));
    }

    #[test]
    fn area_info_serializes_plain_ids() {
        let area = AreaInfo {
            area_id: AreaId::new(3),
            area_name: "Roof".to_string(),
        };
        let value = serde_json::to_value(&area).expect("serialize");
        assert_eq!(value, json!({"area_id": 3, "area_name": "Roof"}));
    }
}
