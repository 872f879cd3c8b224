//! Search module for Answer Finder
//!
//! Handles the file name search:
//! - Query normalization and case-insensitive substring matching
//! - Listing and loading through the file handler
//! - The per-keystroke search state

mod controller;

pub use controller::{normalize_query, FoundAnswer, SearchController, SearchOutcome};

/// Search state for the UI
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw text of the search input
    pub query: String,
}

impl SearchState {
    /// Create a new search state
    pub fn new() -> Self {
        Self::default()
    }

    /// Store new input
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Whether a search is active (the query is not blank)
    pub fn is_active(&self) -> bool {
        !normalize_query(&self.query).is_empty()
    }

    /// Clear search state
    pub fn clear(&mut self) {
        self.query.clear();
    }
}
