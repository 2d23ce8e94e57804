use crate::error::{Error, Result};
use crate::text::split;

const CHARS_PER_WORD: f64 = 5.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Percentage of typed words that match the reference word at the same
/// position. Typed words past the end of the reference never match.
pub fn accuracy(typed: &str, reference: &str) -> f64 {
    let typed_words = split(typed);
    let reference_words = split(reference);

    if typed_words.is_empty() || reference_words.is_empty() {
        return 0.0;
    }

    let correct = typed_words
        .iter()
        .zip(reference_words.iter())
        .filter(|(t, r)| t == r)
        .count();

    (correct as f64 / typed_words.len() as f64) * 100.0
}

/// Words per minute, counting every five characters as one word.
pub fn wpm(typed: &str, elapsed_secs: f64) -> Result<f64> {
    if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
        return Err(Error::NonPositiveElapsed(elapsed_secs));
    }
    let chars = typed.chars().count() as f64;
    Ok((chars / CHARS_PER_WORD) * (SECONDS_PER_MINUTE / elapsed_secs))
}
