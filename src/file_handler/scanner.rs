//! Answers directory lister
//!
//! Lists the immediate children of the answers directory whose names end
//! with the configured extension. Order is whatever the directory read
//! yields; no sorting is applied.

use crate::config::AnswersConfig;
use crate::error::{AnswersError, AnswersResult};
use std::path::PathBuf;

/// Lists answer files in a single directory
#[derive(Debug, Clone)]
pub struct AnswerLister {
    directory: PathBuf,
    extension: String,
}

impl AnswerLister {
    pub fn new(config: &AnswersConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            extension: config.extension.clone(),
        }
    }

    /// Return the names of all entries ending with the configured extension
    pub fn list_answer_files(&self) -> AnswersResult<Vec<String>> {
        let read_dir =
            std::fs::read_dir(&self.directory).map_err(|source| AnswersError::DirectoryUnreadable {
                path: self.directory.clone(),
                source,
            })?;

        let names = read_dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    log::debug!("Skipping non UTF-8 entry name: {:?}", raw);
                    None
                }
            })
            .filter(|name| name.ends_with(&self.extension))
            .collect();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn lister_for(dir: &Path) -> AnswerLister {
        AnswerLister::new(&AnswersConfig {
            directory: dir.to_path_buf(),
            ..AnswersConfig::default()
        })
    }

    #[test]
    fn test_only_foreign_extensions_yields_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join("data.csv"), "x").unwrap();
        fs::write(dir.path().join("txt"), "x").unwrap();

        let names = lister_for(dir.path()).list_answer_files().unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_lists_txt_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alpha.txt"), "x").unwrap();
        fs::write(dir.path().join("beta.txt"), "x").unwrap();
        fs::write(dir.path().join("gamma.md"), "x").unwrap();

        let mut names = lister_for(dir.path()).list_answer_files().unwrap();
        names.sort();
        assert_eq!(names, vec!["alpha.txt", "beta.txt"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LOUD.TXT"), "x").unwrap();

        let names = lister_for(dir.path()).list_answer_files().unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("Answers");

        let result = lister_for(&missing).list_answer_files();
        assert!(matches!(
            result,
            Err(AnswersError::DirectoryUnreadable { .. })
        ));
    }
}
