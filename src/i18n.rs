//! User-facing strings for Answer Finder
//!
//! The application ships a single Hebrew locale. Status values produced by
//! the search flow are typed; this module is the only place that turns them
//! into text.

use crate::state::StatusKind;

/// Get the current language code
pub fn current_language() -> &'static str {
    "he"
}

/// Initialize localization
pub fn init() {
    log::debug!("i18n initialization - using built-in {} strings", current_language());
}

/// Text for an informational or error status shown in the content area
pub fn status_text(status: &StatusKind) -> String {
    match status {
        StatusKind::EmptyDirectory => empty_directory().to_string(),
        StatusKind::NotFound { query } => not_found(query),
        StatusKind::EmptyContent => empty_content().to_string(),
        StatusKind::DirectoryUnreadable { detail } => directory_unreadable(detail),
        StatusKind::FileUnreadable { name, detail } => file_unreadable(name, detail),
    }
}

pub fn empty_directory() -> &'static str {
    "תקיית התשובות ריקה! אנא התקן מחדש את התוכנה!"
}

pub fn not_found(query: &str) -> String {
    format!("לא נמצאו קבצים בשם \"{}\".", query)
}

pub fn empty_content() -> &'static str {
    "אין תוכן בקובץ לאחר השורה הראשונה."
}

pub fn directory_unreadable(detail: &str) -> String {
    format!("שגיאה בקריאת תיקיית Answers: {}", detail)
}

pub fn file_unreadable(name: &str, detail: &str) -> String {
    format!("שגיאה בקריאת קובץ {}: {}", name, detail)
}

/// Heading of the fatal startup screen
pub fn fatal_title() -> &'static str {
    "❌ שגיאה קריטית"
}

/// Body lines of the fatal startup screen
pub fn fatal_body() -> [&'static str; 2] {
    [
        "תיקיית התשובות (Answers) חסרה ואין אפשרות ליצור אותה.",
        "האפליקציה לא יכולה לעבוד ללא תיקייה זו.",
    ]
}

pub fn fatal_detail(detail: &str) -> String {
    format!("פרטי שגיאה: {}", detail)
}

pub fn search_placeholder() -> &'static str {
    "חיפוש..."
}

pub fn copied() -> &'static str {
    "הועתק"
}

pub fn window_title() -> &'static str {
    "Answer Finder"
}

/// Format a numbered display row
pub fn numbered_line(number: usize, text: &str) -> String {
    format!("{}. {}", number, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_quotes_query() {
        assert!(not_found("abc").contains("\"abc\""));
    }

    #[test]
    fn test_empty_directory_and_not_found_differ() {
        let empty = status_text(&StatusKind::EmptyDirectory);
        let missing = status_text(&StatusKind::NotFound {
            query: "x".to_string(),
        });
        assert_ne!(empty, missing);
    }

    #[test]
    fn test_file_unreadable_names_file() {
        let text = status_text(&StatusKind::FileUnreadable {
            name: "a.txt".to_string(),
            detail: "denied".to_string(),
        });
        assert!(text.contains("a.txt"));
        assert!(text.ends_with("denied"));
    }

    #[test]
    fn test_numbered_line() {
        assert_eq!(numbered_line(3, "hello"), "3. hello");
    }
}
