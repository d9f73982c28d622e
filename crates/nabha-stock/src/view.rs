//! Per-screen state for the stock checker.
//!
//! Each screen owns one `StockView`. The visible list is recomputed from the
//! current search term on every call to `visible()`; nothing is cached.
//!
//! The selected location is held for display only. It does not narrow the
//! visible list.

use tracing::debug;

use nabha_contracts::{Location, Medicine};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default)]
pub struct StockView {
    catalog: Catalog,
    search_term: String,
    location: Location,
}

impl StockView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_term: String::new(),
            location: Location::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn location(&self) -> Location {
        self.location
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        debug!(search_term = %self.search_term, "search term changed");
    }

    /// Append one typed character to the search term.
    pub fn push_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    /// Remove the last character of the search term, if any.
    pub fn pop_char(&mut self) {
        self.search_term.pop();
    }

    /// Reset the search term, restoring the full catalog.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        debug!("search cleared");
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
        debug!(location = location.slug(), "location changed");
    }

    pub fn next_location(&mut self) {
        self.set_location(self.location.next());
    }

    pub fn prev_location(&mut self) {
        self.set_location(self.location.prev());
    }

    // ── Derived state ─────────────────────────────────────────────────────────

    /// Medicines matching the current search term, in catalog order.
    pub fn visible(&self) -> Vec<&Medicine> {
        self.catalog.search(&self.search_term)
    }

    /// True when the search term matches nothing ("No medicines found").
    pub fn is_empty_result(&self) -> bool {
        self.visible().is_empty()
    }
}
