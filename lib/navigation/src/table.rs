//! The route table: an ordered list of (pattern, page) pairs.
//!
//! Tables are built once from a static declaration and never change at
//! runtime. Resolution walks the entries in order and the first match wins;
//! a path that matches nothing resolves to [`Page::NotFound`].

use crate::error::RouteError;
use crate::page::{Page, RenderedPage};
use crate::pattern::{RouteParams, RoutePattern};
use facilitipro_core::Result;
use tracing::debug;

/// Routes served by the FacilitiPro UI, in match order.
///
/// The last two entries are the targets of the tour links on the Shop and
/// Machines pages, which carry no area or machine id.
pub const FACILITY_ROUTES: &[(&str, Page)] = &[
    ("/", Page::Login),
    ("/shop", Page::Shop),
    ("/areas/:areaId/machines", Page::Machines),
    ("/machines/:machineId/maintenance", Page::Maintenance),
    ("/machines", Page::Machines),
    ("/maintenance", Page::Maintenance),
];

/// A single route table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: Page,
}

/// The result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The selected page.
    pub page: Page,
    /// The pattern that matched, or `None` for the not-found fallback.
    pub pattern: Option<RoutePattern>,
    /// Captured path parameters.
    pub params: RouteParams,
}

/// An ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from parsed entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicatePattern`] if two entries match exactly
    /// the same set of paths.
    pub fn new(
        entries: impl IntoIterator<Item = (RoutePattern, Page)>,
    ) -> Result<Self, RouteError> {
        let mut routes: Vec<Route> = Vec::new();
        for (pattern, page) in entries {
            if let Some(existing) = routes.iter().find(|r| r.pattern.overlaps(&pattern)) {
                return Err(RouteError::DuplicatePattern {
                    pattern: pattern.to_string(),
                    existing: existing.pattern.to_string(),
                }
                .into());
            }
            routes.push(Route { pattern, page });
        }
        Ok(Self { routes })
    }

    /// Parses and builds a table from `(pattern, page)` declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is malformed or duplicated.
    pub fn from_declarations(declarations: &[(&str, Page)]) -> Result<Self, RouteError> {
        let mut entries = Vec::with_capacity(declarations.len());
        for (pattern, page) in declarations {
            entries.push((RoutePattern::parse(pattern)?, *page));
        }
        Self::new(entries)
    }

    /// Returns the FacilitiPro route table.
    #[must_use]
    pub fn facilities() -> Self {
        Self::from_declarations(FACILITY_ROUTES).expect("facility route table is well-formed")
    }

    /// Returns the entries in match order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Selects the page for `path`.
    ///
    /// The query string and fragment are ignored.
    #[must_use]
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = normalize(path);
        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(path) {
                debug!(path, pattern = %route.pattern, page = %route.page, "route matched");
                return RouteMatch {
                    page: route.page,
                    pattern: Some(route.pattern.clone()),
                    params,
                };
            }
        }

        debug!(path, "no route matched");
        RouteMatch {
            page: Page::NotFound,
            pattern: None,
            params: RouteParams::default(),
        }
    }

    /// Renders the single page selected for `path`.
    #[must_use]
    pub fn render(&self, path: &str) -> RenderedPage {
        let matched = self.resolve(path);
        RenderedPage {
            page: matched.page,
            path: normalize(path).to_string(),
            params: matched.params,
            content: matched.page.content(),
        }
    }
}

/// Strips the query string and fragment from a path.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
