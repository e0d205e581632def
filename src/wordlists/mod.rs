//! Word lists for Wordle finding
//!
//! Provides the embedded word lists and frequency tables, loaders for custom
//! files, and the `Corpus` bundling them for the solver.

mod corpus;
mod embedded;
mod error;
mod frequencies;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{
    ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, LETTER_FREQUENCIES_JSON,
    WORD_FREQUENCIES_JSON,
};
pub use error::CorpusError;
pub use frequencies::{LetterFrequencies, WordFrequencies};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_extras_are_not_answers() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is listed twice");
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for &word in ANSWERS {
            assert!(seen.insert(word), "'{word}' appears twice in the answer list");
        }
    }

    #[test]
    fn word_frequencies_only_name_answers() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().copied().collect();
        let raw: std::collections::HashMap<String, f64> =
            serde_json::from_str(WORD_FREQUENCIES_JSON).unwrap();

        assert!(!raw.is_empty());
        for (word, weight) in &raw {
            assert!(answers.contains(word.as_str()), "'{word}' is not an answer");
            assert!(*weight > 0.0, "'{word}' has a non-positive frequency");
        }
    }

    #[test]
    fn unlisted_answers_weigh_zero() {
        let table = WordFrequencies::from_json(WORD_FREQUENCIES_JSON, "embedded").unwrap();
        assert!(table.get("about") > 0.0);
        assert!(ANSWERS.contains(&"humph"));
        assert_eq!(table.get("humph"), 0.0);
        assert_eq!(table.get("zzzzz"), 0.0);
    }
}
