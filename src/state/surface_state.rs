//! Render surface state
//!
//! The content area below the search input. It is hidden while the query
//! is empty and otherwise shows exactly one of: a status, or an answer with
//! its numbered lines.

use crate::file_handler::DisplayLine;
use crate::search::{FoundAnswer, SearchOutcome};

/// Informational or error status shown instead of answer lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    /// No answer files in the directory
    EmptyDirectory,
    /// Files exist but none matches
    NotFound { query: String },
    /// The matched file has nothing after its header
    EmptyContent,
    /// Listing the directory failed
    DirectoryUnreadable { detail: String },
    /// Reading the matched file failed
    FileUnreadable { name: String, detail: String },
}

/// Body of a found answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBody {
    Lines(Vec<DisplayLine>),
    Empty,
}

/// What the surface displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SurfaceContent {
    #[default]
    Blank,
    /// One or more statuses, rendered top to bottom
    Status(Vec<StatusKind>),
    Answer { title: String, body: AnswerBody },
}

/// Visibility and content of the content area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSurface {
    pub visible: bool,
    pub content: SurfaceContent,
}

impl RenderSurface {
    /// Hidden, empty surface
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Project a search outcome onto the surface
    pub fn from_outcome(outcome: SearchOutcome) -> Self {
        let content = match outcome {
            SearchOutcome::Idle => return Self::hidden(),
            SearchOutcome::EmptyDirectory { listing_error } => {
                let mut statuses = Vec::new();
                if let Some(e) = listing_error {
                    statuses.push(StatusKind::DirectoryUnreadable { detail: e.detail() });
                }
                statuses.push(StatusKind::EmptyDirectory);
                SurfaceContent::Status(statuses)
            }
            SearchOutcome::NoMatch { query } => {
                SurfaceContent::Status(vec![StatusKind::NotFound { query }])
            }
            SearchOutcome::Found(FoundAnswer::Loaded(content)) => SurfaceContent::Answer {
                title: content.title,
                body: AnswerBody::Lines(content.lines),
            },
            SearchOutcome::Found(FoundAnswer::EmptyContent { title, .. }) => {
                SurfaceContent::Answer {
                    title,
                    body: AnswerBody::Empty,
                }
            }
            SearchOutcome::Found(FoundAnswer::Unreadable(e)) => {
                let name = match &e {
                    crate::error::AnswersError::FileUnreadable { name, .. } => name.clone(),
                    _ => String::new(),
                };
                SurfaceContent::Status(vec![StatusKind::FileUnreadable {
                    name,
                    detail: e.detail(),
                }])
            }
        };

        Self {
            visible: true,
            content,
        }
    }

    /// Displayed lines, if an answer with content is shown
    pub fn lines(&self) -> &[DisplayLine] {
        match &self.content {
            SurfaceContent::Answer {
                body: AnswerBody::Lines(lines),
                ..
            } => lines,
            _ => &[],
        }
    }

    /// Text a click on line `number` copies: the trimmed line, no prefix
    pub fn copy_text(&self, number: usize) -> Option<&str> {
        self.lines()
            .iter()
            .find(|line| line.number == number)
            .map(|line| line.text.as_str())
    }
}
