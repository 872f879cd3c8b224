//! Search controller
//!
//! Recomputes the whole search on every input: list the answer files, pick
//! the first whose name contains the query (case-insensitive), load it.

use crate::config::AnswersConfig;
use crate::error::AnswersError;
use crate::file_handler::{AnswerContent, AnswerLister, AnswerLoader};

/// Result of running one query
#[derive(Debug, Default)]
pub enum SearchOutcome {
    /// Query is empty after trimming
    #[default]
    Idle,

    /// No answer files exist. `listing_error` is set when the directory
    /// could not be read at all.
    EmptyDirectory { listing_error: Option<AnswersError> },

    /// Answer files exist but none matches the normalized query
    NoMatch { query: String },

    /// The first matching file
    Found(FoundAnswer),
}

/// What happened when loading the first match
#[derive(Debug)]
pub enum FoundAnswer {
    Loaded(AnswerContent),
    EmptyContent { file_name: String, title: String },
    Unreadable(AnswersError),
}

/// Orchestrates the lister and loader for one answers directory
#[derive(Debug, Clone)]
pub struct SearchController {
    lister: AnswerLister,
    loader: AnswerLoader,
}

impl SearchController {
    pub fn new(lister: AnswerLister, loader: AnswerLoader) -> Self {
        Self { lister, loader }
    }

    pub fn from_config(config: &AnswersConfig) -> Self {
        Self::new(AnswerLister::new(config), AnswerLoader::new(config))
    }

    /// Run a query from scratch
    pub fn search(&self, raw_query: &str) -> SearchOutcome {
        let query = normalize_query(raw_query);
        if query.is_empty() {
            return SearchOutcome::Idle;
        }

        let names = match self.lister.list_answer_files() {
            Ok(names) => names,
            Err(e) => {
                log::warn!("{}: {}", e, e.detail());
                return SearchOutcome::EmptyDirectory {
                    listing_error: Some(e),
                };
            }
        };

        if names.is_empty() {
            return SearchOutcome::EmptyDirectory {
                listing_error: None,
            };
        }

        let Some(name) = first_match(&names, &query) else {
            log::debug!("No answer file matches '{}'", query);
            return SearchOutcome::NoMatch { query };
        };

        log::debug!("Query '{}' matched {}", query, name);

        let found = match self.loader.load_display_lines(name) {
            Ok(content) if content.is_empty() => FoundAnswer::EmptyContent {
                file_name: content.file_name,
                title: content.title,
            },
            Ok(content) => FoundAnswer::Loaded(content),
            Err(e) => {
                log::error!("{}: {}", e, e.detail());
                FoundAnswer::Unreadable(e)
            }
        };
        SearchOutcome::Found(found)
    }
}

/// Trim and lowercase raw input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// First name containing the already-normalized query, in listing order
pub fn first_match<'a>(names: &'a [String], query: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|name| name.to_lowercase().contains(query))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn controller_for(dir: &Path) -> SearchController {
        SearchController::from_config(&AnswersConfig {
            directory: dir.to_path_buf(),
            ..AnswersConfig::default()
        })
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  HeLLo "), "hello");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_first_match_any_lowercase_substring() {
        let names = vec!["Shopping List.txt".to_string()];
        let lower = names[0].to_lowercase();
        for start in 0..lower.len() {
            for end in start + 1..=lower.len() {
                let query = &lower[start..end];
                assert_eq!(first_match(&names, query), Some("Shopping List.txt"));
            }
        }
    }

    #[test]
    fn test_first_match_includes_extension() {
        let names = vec!["alpha.txt".to_string()];
        assert_eq!(first_match(&names, ".txt"), Some("alpha.txt"));
        assert_eq!(first_match(&names, "beta"), None);
    }

    #[test]
    fn test_first_match_uses_listing_order() {
        let names = vec!["b-topic.txt".to_string(), "a-topic.txt".to_string()];
        assert_eq!(first_match(&names, "topic"), Some("b-topic.txt"));
    }

    #[test]
    fn test_empty_query_is_idle() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            controller_for(dir.path()).search("   "),
            SearchOutcome::Idle
        ));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();

        let outcome = controller_for(dir.path()).search("read");
        assert!(matches!(
            outcome,
            SearchOutcome::EmptyDirectory {
                listing_error: None
            }
        ));
    }

    #[test]
    fn test_unreadable_directory_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let outcome = controller_for(&dir.path().join("missing")).search("x");
        assert!(matches!(
            outcome,
            SearchOutcome::EmptyDirectory {
                listing_error: Some(AnswersError::DirectoryUnreadable { .. })
            }
        ));
    }

    #[test]
    fn test_no_match_is_distinct_from_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alpha.txt"), "Alpha\none").unwrap();

        match controller_for(dir.path()).search("  ZETA ") {
            SearchOutcome::NoMatch { query } => assert_eq!(query, "zeta"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_found_loads_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Alpha.txt"), "Title\na\nend\nb").unwrap();

        match controller_for(dir.path()).search("ALP") {
            SearchOutcome::Found(FoundAnswer::Loaded(content)) => {
                assert_eq!(content.title, "Alpha");
                assert_eq!(content.lines.len(), 2);
                assert_eq!(content.lines[0].text, "a");
                assert_eq!(content.lines[1].text, "b");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_found_with_only_header_is_empty_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lonely.txt"), "Just a title\nend\n").unwrap();

        match controller_for(dir.path()).search("lonely") {
            SearchOutcome::Found(FoundAnswer::EmptyContent { file_name, title }) => {
                assert_eq!(file_name, "lonely.txt");
                assert_eq!(title, "lonely");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_found_directory_named_like_answer_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let outcome = controller_for(dir.path()).search("folder");
        assert!(matches!(
            outcome,
            SearchOutcome::Found(FoundAnswer::Unreadable(AnswersError::FileUnreadable { .. }))
        ));
    }
}
