//! Error types for the navigation crate.
//!
//! - `RouteError`: malformed patterns and route table conflicts
//! - `NavigationError`: rejected navigation requests

use std::fmt;

/// Errors from parsing route patterns and building route tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Pattern does not begin with `/`.
    MissingLeadingSlash { pattern: String },
    /// Pattern contains an empty segment, as in `/a//b`.
    EmptySegment { pattern: String },
    /// A parameter segment has no name, as in `/areas/:/machines`.
    EmptyParamName { pattern: String },
    /// The same parameter name appears twice in one pattern.
    DuplicateParam { pattern: String, name: String },
    /// Two patterns in a table match exactly the same paths.
    DuplicatePattern { pattern: String, existing: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLeadingSlash { pattern } => {
                write!(f, "route pattern '{pattern}' must start with '/'")
            }
            Self::EmptySegment { pattern } => {
                write!(f, "route pattern '{pattern}' contains an empty segment")
            }
            Self::EmptyParamName { pattern } => {
                write!(f, "route pattern '{pattern}' has a parameter without a name")
            }
            Self::DuplicateParam { pattern, name } => {
                write!(f, "route pattern '{pattern}' declares parameter '{name}' twice")
            }
            Self::DuplicatePattern { pattern, existing } => {
                write!(f, "route pattern '{pattern}' duplicates '{existing}'")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Errors from navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Only absolute paths can be navigated to.
    RelativePath { path: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativePath { path } => {
                write!(f, "cannot navigate to relative path '{path}'")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
