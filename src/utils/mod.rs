//! Utilities module for Answer Finder
//!
//! Shared helper functions:
//! - Path utilities

/// Path utilities
pub mod path {
    use std::path::Path;

    /// Get the file name without extension
    pub fn file_stem(path: &Path) -> Option<String> {
        path.file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_file_stem() {
        assert_eq!(path::file_stem(Path::new("Topic.txt")), Some("Topic".to_string()));
        assert_eq!(path::file_stem(Path::new("a.b.txt")), Some("a.b".to_string()));
        assert_eq!(path::file_stem(Path::new("plain")), Some("plain".to_string()));
    }
}
