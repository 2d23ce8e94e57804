use crate::error::{Error, Result};
use crate::text::{lower, remove_punctuation, split};
use std::collections::HashSet;

/// Return the `k`th paragraph (0-based) accepted by `select`, or an empty
/// string when fewer than `k + 1` paragraphs match.
pub fn choose<S, F>(paragraphs: &[S], select: F, k: usize) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    paragraphs
        .iter()
        .map(|p| p.as_ref())
        .filter(|&p| select(p))
        .nth(k)
        .map(String::from)
        .unwrap_or_default()
}

/// Set of lowercase topic words used to filter paragraphs
#[derive(Clone, Debug, PartialEq)]
pub struct Topic {
    words: HashSet<String>,
}

impl Topic {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.into();
            if lower(&word) != word {
                return Err(Error::TopicNotLowercase(word));
            }
            set.insert(word);
        }
        Ok(Self { words: set })
    }

    /// Whether the paragraph, lowercased and stripped of punctuation,
    /// shares at least one word with this topic
    pub fn matches(&self, paragraph: &str) -> bool {
        let cleaned = lower(&remove_punctuation(paragraph));
        split(&cleaned).into_iter().any(|w| self.words.contains(w))
    }
}

/// Build a paragraph predicate for the given lowercase topic words.
pub fn about<I, S>(topics: I) -> Result<impl Fn(&str) -> bool>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let topic = Topic::new(topics)?;
    Ok(move |paragraph: &str| topic.matches(paragraph))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dogs() -> impl Fn(&str) -> bool {
        about(["dog", "dogs", "pup", "puppy"]).unwrap()
    }

    #[test]
    fn test_choose_always_true_indexes_directly() {
        let ps = ["short", "really long", "tiny"];
        for (k, expected) in ps.iter().enumerate() {
            assert_eq!(choose(&ps, |_| true, k), *expected);
        }
        assert_eq!(choose(&ps, |_| true, 3), "");
        assert_eq!(choose(&ps, |_| true, 100), "");
    }

    #[test]
    fn test_choose_filters_in_order() {
        let ps = ["hi", "how are you", "fine"];
        let short = |p: &str| p.len() <= 4;
        assert_eq!(choose(&ps, short, 0), "hi");
        assert_eq!(choose(&ps, short, 1), "fine");
        assert_eq!(choose(&ps, short, 2), "");
    }

    #[test]
    fn test_choose_empty_paragraphs() {
        let ps: [&str; 0] = [];
        assert_eq!(choose(&ps, |_| true, 0), "");
    }

    #[test]
    fn test_about_dogs() {
        let ps = ["Cute Dog!", "That is a cat.", "Nice pup!"];
        assert_eq!(choose(&ps, dogs(), 0), "Cute Dog!");
        assert_eq!(choose(&ps, dogs(), 1), "Nice pup!");
        assert_eq!(choose(&ps, dogs(), 2), "");
    }

    #[test]
    fn test_about_requires_whole_words() {
        let select = dogs();
        assert!(!select("He is a dogged fellow."));
        assert!(select("Puppy, puppy, PUPPY!"));
        assert!(!select(""));
    }

    #[test]
    fn test_about_punctuation_inside_word() {
        let select = about(["dogs"]).unwrap();
        assert!(select("Two dog's... no, dogs."));
        assert!(select("d.o.g.s"));
    }

    #[test]
    fn test_about_rejects_uppercase_topic() {
        let result = about(["dog", "Cat"]);
        assert!(matches!(result, Err(Error::TopicNotLowercase(ref w)) if w == "Cat"));
    }

    #[test]
    fn test_empty_topic_matches_nothing() {
        let select = about(Vec::<String>::new()).unwrap();
        assert!(!select("Cute Dog!"));
    }
}
