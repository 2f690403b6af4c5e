//! Client-side navigation model for FacilitiPro.
//!
//! This crate provides:
//!
//! - **Route patterns**: `/areas/:areaId/machines` style patterns with
//!   captured path parameters
//! - **Route table**: the ordered, statically declared mapping from
//!   patterns to pages, where the first match wins
//! - **Pages**: the heading and tour link each page renders
//! - **Navigator**: browser-like history that renders one page at a time

pub mod error;
pub mod navigator;
pub mod page;
pub mod pattern;
pub mod table;

pub use error::{NavigationError, RouteError};
pub use navigator::Navigator;
pub use page::{Page, PageContent, PageLink, RenderedPage};
pub use pattern::{RouteParams, RoutePattern, Segment};
pub use table::{Route, RouteMatch, RouteTable};
