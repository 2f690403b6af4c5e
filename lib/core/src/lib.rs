//! Core domain types and utilities for FacilitiPro.
//!
//! This crate provides the typed identifiers for facility records and the
//! shared `Result` alias used throughout the workspace.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{AreaId, MachineId, MaintenanceLogId, ParseIdError};
