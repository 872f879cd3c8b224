//! Root application state
//!
//! Owns the search input, the render surface and the fatal startup state.
//! Everything is replaced wholesale on each search; nothing persists.

use crate::search::{SearchOutcome, SearchState};
use crate::state::RenderSurface;

/// Root application state container
#[derive(Debug, Default)]
pub struct AppState {
    /// Search input
    pub search: SearchState,

    /// Content area
    pub surface: RenderSurface,

    /// Number of the line most recently copied, cleared on each search
    pub copied_line: Option<usize>,

    /// Set when the answers directory could not be created
    pub fatal: Option<FatalState>,
}

/// Full-window replacement shown before the app quits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalState {
    /// Underlying error message
    pub detail: String,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the query and the outcome computed for it
    pub fn apply_search(&mut self, query: String, outcome: SearchOutcome) {
        self.search.set_query(query);
        self.surface = RenderSurface::from_outcome(outcome);
        self.copied_line = None;
    }

    /// Empty the query and hide the surface
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.surface = RenderSurface::hidden();
        self.copied_line = None;
    }

    /// Record a line as copied; returns its text when the line exists
    pub fn mark_copied(&mut self, number: usize) -> Option<String> {
        let text = self.surface.copy_text(number)?.to_string();
        self.copied_line = Some(number);
        Some(text)
    }

    /// Enter the fatal state
    pub fn set_fatal(&mut self, detail: impl Into<String>) {
        self.fatal = Some(FatalState {
            detail: detail.into(),
        });
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_handler::{AnswerContent, DisplayLine};
    use crate::search::FoundAnswer;

    fn found() -> SearchOutcome {
        SearchOutcome::Found(FoundAnswer::Loaded(AnswerContent {
            file_name: "a.txt".to_string(),
            title: "a".to_string(),
            lines: vec![DisplayLine::new(1, "one"), DisplayLine::new(2, "two")],
        }))
    }

    #[test]
    fn test_empty_query_hides_surface_after_found() {
        let mut state = AppState::new();
        state.apply_search("a".to_string(), found());
        assert!(state.surface.visible);

        state.apply_search(String::new(), SearchOutcome::Idle);
        assert!(!state.surface.visible);
    }

    #[test]
    fn test_mark_copied_returns_trimmed_text() {
        let mut state = AppState::new();
        state.apply_search("a".to_string(), found());

        assert_eq!(state.mark_copied(1), Some("one".to_string()));
        assert_eq!(state.copied_line, Some(1));
        assert_eq!(state.mark_copied(9), None);
        assert_eq!(state.copied_line, Some(1));
    }

    #[test]
    fn test_new_search_clears_copied_marker() {
        let mut state = AppState::new();
        state.apply_search("a".to_string(), found());
        state.mark_copied(2);

        state.apply_search("ab".to_string(), SearchOutcome::NoMatch {
            query: "ab".to_string(),
        });
        assert_eq!(state.copied_line, None);
    }

    #[test]
    fn test_clear_search() {
        let mut state = AppState::new();
        state.apply_search("a".to_string(), found());
        state.clear_search();
        assert!(state.search.query.is_empty());
        assert!(!state.surface.visible);
    }

    #[test]
    fn test_set_fatal() {
        let mut state = AppState::new();
        assert!(!state.is_fatal());
        state.set_fatal("read-only file system");
        assert_eq!(state.fatal.as_ref().map(|f| f.detail.as_str()), Some("read-only file system"));
    }
}
