//! Answer file loading
//!
//! Reads an answer file and turns it into numbered display lines:
//! blank lines and sentinel lines are dropped wherever they appear, then
//! the first remaining line (the header) is dropped unconditionally.

use crate::config::AnswersConfig;
use crate::error::{AnswersError, AnswersResult};
use crate::utils;
use std::path::{Path, PathBuf};

/// UTF-8 byte order mark
const UTF8_BOM: &str = "\u{feff}";

/// One trimmed, numbered line of answer content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// 1-based position among the displayed lines
    pub number: usize,
    /// Trimmed text, exactly what gets copied
    pub text: String,
}

impl DisplayLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Loaded content of one answer file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerContent {
    /// File name as listed, extension included
    pub file_name: String,
    /// File name without its extension
    pub title: String,
    pub lines: Vec<DisplayLine>,
}

impl AnswerContent {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Loads answer files from a single directory
#[derive(Debug, Clone)]
pub struct AnswerLoader {
    directory: PathBuf,
    sentinel: String,
}

impl AnswerLoader {
    pub fn new(config: &AnswersConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            sentinel: config.sentinel.to_lowercase(),
        }
    }

    /// Read `name` from the answers directory and clean it for display
    pub fn load_display_lines(&self, name: &str) -> AnswersResult<AnswerContent> {
        let path = self.directory.join(name);
        let bytes = std::fs::read(&path).map_err(|source| AnswersError::FileUnreadable {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(&text);
        let lines = clean_lines(text, &self.sentinel);

        log::debug!("Loaded {} display line(s) from {}", lines.len(), path.display());

        Ok(AnswerContent {
            file_name: name.to_string(),
            title: utils::path::file_stem(Path::new(name)).unwrap_or_else(|| name.to_string()),
            lines,
        })
    }
}

/// Filter blank and sentinel lines, drop the header, number the rest
pub fn clean_lines(text: &str, sentinel: &str) -> Vec<DisplayLine> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case(sentinel))
        .skip(1)
        .enumerate()
        .map(|(i, line)| DisplayLine::new(i + 1, line))
        .collect()
}

/// Make sure the answers directory exists, creating it when missing
pub fn ensure_answers_dir(path: &Path) -> AnswersResult<()> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path).map_err(|source| AnswersError::DirectoryUncreatable {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created answers directory {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader_for(dir: &Path) -> AnswerLoader {
        AnswerLoader::new(&AnswersConfig {
            directory: dir.to_path_buf(),
            ..AnswersConfig::default()
        })
    }

    fn texts(lines: &[DisplayLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_sentinel_filtered_before_header_drop() {
        let lines = clean_lines("Title\na\nend\nb", "end");
        assert_eq!(lines, vec![DisplayLine::new(1, "a"), DisplayLine::new(2, "b")]);
    }

    #[test]
    fn test_leading_blank_and_sentinel_lines_do_not_count_as_header() {
        let lines = clean_lines("\n  \nEND\nTitle\nfirst\n", "end");
        assert_eq!(texts(&lines), vec!["first"]);
    }

    #[test]
    fn test_header_dropped_even_when_not_a_title() {
        let lines = clean_lines("1. real content\n2. more", "end");
        assert_eq!(texts(&lines), vec!["2. more"]);
    }

    #[test]
    fn test_sentinel_is_case_insensitive_and_trimmed() {
        let lines = clean_lines("Title\n  End  \na\neNd\nb\nendless", "end");
        assert_eq!(texts(&lines), vec!["a", "b", "endless"]);
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let lines = clean_lines("Title\r\n  one \r\ntwo\r\n", "end");
        assert_eq!(texts(&lines), vec!["one", "two"]);
    }

    #[test]
    fn test_only_header_yields_no_lines() {
        assert!(clean_lines("Title\n\nend\n", "end").is_empty());
        assert!(clean_lines("", "end").is_empty());
    }

    #[test]
    fn test_load_display_lines_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Topic.txt"), "\u{feff}Topic\nfirst\n\nsecond\nend\n").unwrap();

        let content = loader_for(dir.path()).load_display_lines("Topic.txt").unwrap();
        assert_eq!(content.file_name, "Topic.txt");
        assert_eq!(content.title, "Topic");
        assert_eq!(texts(&content.lines), vec!["first", "second"]);
        assert_eq!(content.lines[1].number, 2);
    }

    #[test]
    fn test_load_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let result = loader_for(dir.path()).load_display_lines("gone.txt");
        match result {
            Err(AnswersError::FileUnreadable { name, .. }) => assert_eq!(name, "gone.txt"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ensure_answers_dir_creates_missing() {
        let dir = TempDir::new().unwrap();
        let answers = dir.path().join("Answers");
        ensure_answers_dir(&answers).unwrap();
        assert!(answers.is_dir());
        // second call is a no-op
        ensure_answers_dir(&answers).unwrap();
    }

    #[test]
    fn test_ensure_answers_dir_fails_under_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = ensure_answers_dir(&blocker.join("Answers"));
        assert!(matches!(
            result,
            Err(AnswersError::DirectoryUncreatable { .. })
        ));
    }
}
