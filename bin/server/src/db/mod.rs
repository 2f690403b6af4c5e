//! Database repositories for FacilitiPro.
//!
//! This module provides data access for:
//! - Facility areas
//! - Machines within an area
//! - Maintenance logs for a machine
//!
//! Deleting an area removes its machines, and deleting a machine removes
//! its logs, through `ON DELETE CASCADE` foreign keys.

pub mod area;
pub mod machine;
pub mod maintenance_log;

pub use area::AreaRepository;
pub use machine::MachineRepository;
pub use maintenance_log::MaintenanceLogRepository;

/// Returns true if `err` is a unique constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Returns true if `err` is a foreign key violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
