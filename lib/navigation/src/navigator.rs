//! Browser-like navigation over a route table.

use crate::error::NavigationError;
use crate::page::RenderedPage;
use crate::table::RouteTable;
use tracing::debug;

/// Tracks the active location and its history.
///
/// Navigating pushes a new entry and discards anything ahead of the
/// current position, like `history.pushState`. Every move re-renders the
/// page for the new location.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    history: Vec<String>,
    position: usize,
}

impl Navigator {
    /// Creates a navigator positioned at `initial_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_path` is not absolute.
    pub fn new(table: RouteTable, initial_path: &str) -> Result<Self, NavigationError> {
        ensure_absolute(initial_path)?;
        Ok(Self {
            table,
            history: vec![initial_path.to_string()],
            position: 0,
        })
    }

    /// Returns the active path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.history[self.position]
    }

    /// Renders the page for the active path.
    #[must_use]
    pub fn current(&self) -> RenderedPage {
        self.table.render(self.current_path())
    }

    /// Moves to `path` and renders the page it selects.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not absolute.
    pub fn navigate(&mut self, path: &str) -> Result<RenderedPage, NavigationError> {
        ensure_absolute(path)?;
        self.history.truncate(self.position + 1);
        self.history.push(path.to_string());
        self.position += 1;
        debug!(path, depth = self.history.len(), "navigated");
        Ok(self.current())
    }

    /// Activates the link on the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if the link target is not absolute. Every page
    /// link is absolute, so this only propagates [`Self::navigate`].
    pub fn follow_link(&mut self) -> Result<RenderedPage, NavigationError> {
        let href = self.current().link().href;
        self.navigate(href)
    }

    /// Steps back one history entry, or returns `None` at the first entry.
    pub fn back(&mut self) -> Option<RenderedPage> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.current())
    }

    /// Steps forward one history entry, or returns `None` at the last entry.
    pub fn forward(&mut self) -> Option<RenderedPage> {
        if self.position + 1 >= self.history.len() {
            return None;
        }
        self.position += 1;
        Some(self.current())
    }
}

fn ensure_absolute(path: &str) -> Result<(), NavigationError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(NavigationError::RelativePath {
            path: path.to_string(),
        })
    }
}
