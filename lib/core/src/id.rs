//! Strongly-typed ID types for facility records.
//!
//! Records are keyed by database-assigned integers. The wrappers keep an
//! area id from being passed where a machine id is expected, while still
//! displaying as the bare number so they can be spliced into URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed ID wrapper around a database key.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }

            /// Returns the prefix accepted when parsing.
            #[must_use]
            pub const fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let prefix_with_underscore = concat!($prefix, "_");
                let digits = s.strip_prefix(prefix_with_underscore).unwrap_or(s);

                let value = digits.parse::<i64>().map_err(|e| ParseIdError {
                    id_type: stringify!($name),
                    reason: e.to_string(),
                })?;

                if value <= 0 {
                    return Err(ParseIdError {
                        id_type: stringify!($name),
                        reason: format!("id must be positive, got {value}"),
                    });
                }

                Ok(Self(value))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a facility area.
    AreaId,
    "area"
);

define_id!(
    /// Unique identifier for a machine within an area.
    MachineId,
    "mach"
);

define_id!(
    /// Unique identifier for a maintenance log entry.
    MaintenanceLogId,
    "log"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bare_number() {
        let id = AreaId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn parse_bare_number() {
        let id: MachineId = "17".parse().expect("should parse");
        assert_eq!(id.get(), 17);
    }

    #[test]
    fn parse_with_prefix() {
        let id: MaintenanceLogId = "log_9".parse().expect("should parse");
        assert_eq!(id, MaintenanceLogId::new(9));
    }

    #[test]
    fn parse_rejects_other_prefix() {
        let result: Result<AreaId, _> = "mach_3".parse();
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_non_positive() {
        let err = "0".parse::<AreaId>().unwrap_err();
        assert_eq!(err.id_type, "AreaId");
        assert!(err.reason.contains("positive"));
    }

    #[test]
    fn parse_invalid_number() {
        let result: Result<MachineId, _> = "not_a_number".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "MachineId");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&AreaId::new(5)).expect("should serialize");
        assert_eq!(json, "5");
    }

    #[test]
    fn prefixes() {
        assert_eq!(AreaId::prefix(), "area");
        assert_eq!(MachineId::prefix(), "mach");
        assert_eq!(MaintenanceLogId::prefix(), "log");
    }
}
