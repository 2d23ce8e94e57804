//! Limit-bounded string distances used to rank autocorrect candidates.
//!
//! All three functions share the same contract: `diff(start, goal, limit)`
//! returns a non-negative cost, and any cost above `limit` means the
//! candidate is rejected. Once the budget runs out the recursive variants
//! fall back to the difference in remaining lengths, so results past the
//! limit are lower bounds rather than exact distances. Autocorrect only ever
//! compares them against the limit, which keeps that approximation harmless.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named diff functions selectable from the command line and config
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiffFunction {
    /// substitutions only
    Sphinx,
    /// insertions, deletions and substitutions
    #[default]
    Feline,
    /// exact bounded edit distance
    Final,
}

impl DiffFunction {
    pub fn distance(self, start: &str, goal: &str, limit: i64) -> i64 {
        match self {
            DiffFunction::Sphinx => sphinx_swap(start, goal, limit),
            DiffFunction::Feline => feline_fixes(start, goal, limit),
            DiffFunction::Final => final_diff(start, goal, limit),
        }
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn length_gap(start: &[char], goal: &[char]) -> i64 {
    (start.len() as i64 - goal.len() as i64).abs()
}

/// Number of same-position substitutions needed to turn `start` into
/// `goal`, plus the difference in their lengths.
pub fn sphinx_swap(start: &str, goal: &str, limit: i64) -> i64 {
    swap(&chars(start), &chars(goal), limit)
}

fn swap(start: &[char], goal: &[char], limit: i64) -> i64 {
    match (start.split_first(), goal.split_first()) {
        (Some((s, start_rest)), Some((g, goal_rest))) if limit >= 0 => {
            if s == g {
                swap(start_rest, goal_rest, limit)
            } else {
                swap(start_rest, goal_rest, limit - 1) + 1
            }
        }
        _ => length_gap(start, goal),
    }
}

/// Edit distance from `start` to `goal` counting insertions, deletions and
/// substitutions, abandoning exact search once `limit` edits are spent.
pub fn feline_fixes(start: &str, goal: &str, limit: i64) -> i64 {
    fixes(&chars(start), &chars(goal), limit)
}

fn fixes(start: &[char], goal: &[char], limit: i64) -> i64 {
    match (start.split_first(), goal.split_first()) {
        (Some((s, start_rest)), Some((g, goal_rest))) if limit >= 0 => {
            if s == g {
                return fixes(start_rest, goal_rest, limit);
            }
            let insert = fixes(start, goal_rest, limit - 1);
            let delete = fixes(start_rest, goal, limit - 1);
            let substitute = fixes(start_rest, goal_rest, limit - 1);
            insert.min(delete).min(substitute) + 1
        }
        _ => length_gap(start, goal),
    }
}

/// Exact Levenshtein distance, or `limit + 1` as soon as every alignment is
/// known to cost more than `limit`. A negative `limit` returns the length
/// gap, matching the recursive variants.
pub fn final_diff(start: &str, goal: &str, limit: i64) -> i64 {
    let start = chars(start);
    let goal = chars(goal);
    if limit < 0 {
        return length_gap(&start, &goal);
    }
    let gap = length_gap(&start, &goal);
    if gap > limit {
        return limit + 1;
    }
    if start.is_empty() || goal.is_empty() {
        return gap;
    }

    let mut prev: Vec<i64> = (0..=goal.len() as i64).collect();
    let mut curr = vec![0; goal.len() + 1];

    for (i, s) in start.iter().enumerate() {
        curr[0] = i as i64 + 1;
        for (j, g) in goal.iter().enumerate() {
            let cost = if s == g { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        if curr.iter().all(|&d| d > limit) {
            return limit + 1;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[goal.len()];
    if distance > limit {
        limit + 1
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIG: i64 = 100;

    #[test]
    fn test_sphinx_swap_counts_substitutions() {
        assert_eq!(sphinx_swap("nice", "rice", BIG), 1);
        assert_eq!(sphinx_swap("range", "rungs", BIG), 2);
        assert_eq!(sphinx_swap("ab", "ba", BIG), 2);
        assert_eq!(sphinx_swap("same", "same", BIG), 0);
    }

    #[test]
    fn test_sphinx_swap_adds_length_difference() {
        assert_eq!(sphinx_swap("pill", "pillage", BIG), 3);
        assert_eq!(sphinx_swap("roses", "arose", BIG), 5);
        assert_eq!(sphinx_swap("", "abc", BIG), 3);
    }

    #[test]
    fn test_sphinx_swap_never_shifts() {
        // a deletion would fix this in one edit
        assert_eq!(sphinx_swap("abc", "bc", BIG), 3);
        assert_eq!(feline_fixes("abc", "bc", BIG), 1);
    }

    #[test]
    fn test_sphinx_swap_stops_after_limit() {
        // four substitutions needed, budget of one
        assert_eq!(sphinx_swap("abcd", "wxyz", 1), 2);
        assert_eq!(sphinx_swap("abcd", "wxyz", 0), 1);
    }

    #[test]
    fn test_feline_fixes_matches_levenshtein() {
        assert_eq!(feline_fixes("kitten", "sitting", BIG), 3);
        assert_eq!(feline_fixes("cats", "scat", BIG), 2);
        assert_eq!(feline_fixes("purng", "purring", BIG), 2);
        assert_eq!(feline_fixes("ckiteus", "kittens", BIG), 3);
        assert_eq!(feline_fixes("", "", BIG), 0);
    }

    #[test]
    fn test_feline_fixes_bounded_by_limit() {
        assert!(feline_fixes("kitten", "sitting", 1) > 1);
        assert!(feline_fixes("wxyz", "abcd", 2) > 2);
    }

    #[test]
    fn test_negative_initial_limit_uses_length_gap() {
        assert_eq!(sphinx_swap("abc", "xy", -1), 1);
        assert_eq!(feline_fixes("abc", "xy", -5), 1);
        assert_eq!(final_diff("abc", "xy", -2), 1);
    }

    #[test]
    fn test_final_diff_exact_within_limit() {
        assert_eq!(final_diff("kitten", "sitting", 3), 3);
        assert_eq!(final_diff("kitten", "sitting", BIG), 3);
        assert_eq!(final_diff("abc", "bc", 2), 1);
        assert_eq!(final_diff("same", "same", 0), 0);
    }

    #[test]
    fn test_final_diff_past_limit() {
        assert_eq!(final_diff("kitten", "sitting", 2), 3);
        assert_eq!(final_diff("a", "abcdef", 2), 3);
        assert_eq!(final_diff("wxyz", "abcd", 1), 2);
    }

    #[test]
    fn test_final_diff_empty_side_is_capped() {
        assert_eq!(final_diff("", "abcdef", 2), 3);
        assert_eq!(final_diff("abcdef", "", 0), 1);
        assert_eq!(final_diff("", "ab", 2), 2);
        assert_eq!(final_diff("", "", 0), 0);
    }

    #[test]
    fn test_final_diff_agrees_with_feline_when_unbounded() {
        let pairs = [
            ("wird", "weird"),
            ("speling", "spelling"),
            ("teh", "the"),
            ("acommodate", "accommodate"),
        ];
        for (a, b) in pairs {
            assert_eq!(final_diff(a, b, BIG), feline_fixes(a, b, BIG), "{a} -> {b}");
        }
    }

    #[test]
    fn test_diff_function_dispatch() {
        assert_eq!(DiffFunction::Sphinx.distance("abc", "bc", BIG), 3);
        assert_eq!(DiffFunction::Feline.distance("abc", "bc", BIG), 1);
        assert_eq!(DiffFunction::Final.distance("abc", "bc", BIG), 1);
        assert_eq!(DiffFunction::default(), DiffFunction::Feline);
        assert_eq!(DiffFunction::Sphinx.to_string(), "sphinx");
    }
}
