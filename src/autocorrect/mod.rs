pub mod diff;

pub use diff::{feline_fixes, final_diff, sphinx_swap, DiffFunction};

use crate::error::Result;
use crate::paragraphs::core::DATA_DIR;
use itertools::Itertools;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DEFAULT_WORDS: &str = "words.txt";

/// Return the element of `valid_words` closest to `word` under `diff`.
///
/// `word` comes back unchanged when it is already valid, or when even the
/// closest candidate costs more than `limit`. Ties go to the candidate that
/// appears first.
pub fn autocorrect<S, F>(word: &str, valid_words: &[S], diff: F, limit: i64) -> String
where
    S: AsRef<str>,
    F: Fn(&str, &str, i64) -> i64,
{
    if valid_words.iter().any(|w| w.as_ref() == word) {
        return word.to_string();
    }

    let distances: Vec<i64> = valid_words
        .iter()
        .map(|candidate| diff(word, candidate.as_ref(), limit))
        .collect();

    match distances.iter().position_min() {
        Some(idx) if distances[idx] <= limit => {
            let corrected = valid_words[idx].as_ref();
            log::trace!("autocorrect {word:?} -> {corrected:?} (cost {})", distances[idx]);
            corrected.to_string()
        }
        _ => word.to_string(),
    }
}

/// Vocabulary of valid words in file order
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Word list bundled with the binary
    pub fn embedded() -> Self {
        let contents = DATA_DIR
            .get_file(DEFAULT_WORDS)
            .and_then(|f| f.contents_utf8())
            .unwrap_or_default();
        Self::parse(contents)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let list = Self::parse(&contents);
        log::debug!(
            "loaded {} valid words from {}",
            list.len(),
            path.as_ref().display()
        );
        Ok(list)
    }

    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Autocorrect a single word against this vocabulary
    pub fn correct(&self, word: &str, diff: DiffFunction, limit: i64) -> String {
        if self.contains(word) {
            return word.to_string();
        }
        autocorrect(word, &self.words, |a, b, l| diff.distance(a, b, l), limit)
    }
}

/// Autocorrect every whitespace-separated word of `typed`, rejoining the
/// result with single spaces.
pub fn autocorrect_text(typed: &str, words: &WordList, diff: DiffFunction, limit: i64) -> String {
    typed
        .split_whitespace()
        .map(|w| words.correct(w, diff, limit))
        .join(" ")
}
