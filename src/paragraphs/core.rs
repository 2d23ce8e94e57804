use crate::error::Result;
use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;

pub(crate) static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

const DEFAULT_PARAGRAPHS: &str = "sample_paragraphs.txt";

/// Ordered, immutable set of test paragraphs
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphSet {
    paragraphs: Vec<String>,
}

impl ParagraphSet {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// Paragraphs bundled with the binary
    pub fn embedded() -> Self {
        let contents = DATA_DIR
            .get_file(DEFAULT_PARAGRAPHS)
            .and_then(|f| f.contents_utf8())
            .unwrap_or_default();
        Self::parse(contents)
    }

    /// Read a flat file with one paragraph per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let set = Self::parse(&contents);
        log::debug!(
            "loaded {} paragraphs from {}",
            set.len(),
            path.as_ref().display()
        );
        Ok(set)
    }

    pub fn parse(contents: &str) -> Self {
        let paragraphs = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { paragraphs }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_paragraphs_present() {
        let set = ParagraphSet::embedded();
        assert!(!set.is_empty());
        assert!(set.as_slice().iter().all(|p| !p.trim().is_empty()));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let set = ParagraphSet::parse("  first line \n\n\t\nsecond line\n");
        assert_eq!(set.as_slice(), &["first line", "second line"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Cute Dog!").unwrap();
        writeln!(file, "That is a cat.").unwrap();

        let set = ParagraphSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1], "That is a cat.");
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let result = ParagraphSet::from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
