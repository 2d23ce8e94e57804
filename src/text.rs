/// Lowercase a string (Unicode aware).
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Split on runs of whitespace, never yielding empty tokens.
pub fn split(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Strip ASCII punctuation, leaving everything else in place.
pub fn remove_punctuation(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
