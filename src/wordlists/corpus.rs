//! The static corpus the finder searches
//!
//! Loaded once at startup and never mutated afterwards, so a `&Corpus` can be
//! shared freely between solvers and threads.

use super::loader::words_from_slice;
use super::{
    ALLOWED, ANSWERS, CorpusError, LETTER_FREQUENCIES_JSON, LetterFrequencies,
    WORD_FREQUENCIES_JSON, WordFrequencies,
};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Candidate dictionary, valid-guess set and frequency tables
#[derive(Debug, Clone)]
pub struct Corpus {
    answers: Vec<Word>,
    valid_guesses: FxHashSet<String>,
    letter_frequencies: LetterFrequencies,
    word_frequencies: WordFrequencies,
}

impl Corpus {
    /// Build a corpus from its parts
    ///
    /// Duplicate answers are dropped (first occurrence kept). Every answer is
    /// also a valid guess.
    #[must_use]
    pub fn new(
        answers: Vec<Word>,
        extra_guesses: &[Word],
        letter_frequencies: LetterFrequencies,
        word_frequencies: WordFrequencies,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        let valid_guesses = answers
            .iter()
            .chain(extra_guesses)
            .map(|word| word.text().to_string())
            .collect();

        Self {
            answers,
            valid_guesses,
            letter_frequencies,
            word_frequencies,
        }
    }

    /// The corpus compiled into the binary
    ///
    /// # Errors
    /// Returns `CorpusError::Json` if an embedded table fails to parse.
    pub fn embedded() -> Result<Self, CorpusError> {
        let letter_frequencies =
            LetterFrequencies::from_json(LETTER_FREQUENCIES_JSON, "embedded letter table")?;
        let word_frequencies =
            WordFrequencies::from_json(WORD_FREQUENCIES_JSON, "embedded word table")?;

        let corpus = Self::new(
            words_from_slice(ANSWERS),
            &words_from_slice(ALLOWED),
            letter_frequencies,
            word_frequencies,
        );
        log::debug!(
            "Embedded corpus: {} answers, {} valid guesses, {} word frequencies",
            corpus.answers.len(),
            corpus.valid_guesses.len(),
            corpus.word_frequencies.len()
        );
        Ok(corpus)
    }

    /// Replace the candidate dictionary (custom answer lists)
    #[must_use]
    pub fn with_answers(self, answers: Vec<Word>) -> Self {
        let extra: Vec<Word> = self
            .valid_guesses
            .iter()
            .filter_map(|text| Word::new(text.as_str()).ok())
            .collect();
        Self::new(
            answers,
            &extra,
            self.letter_frequencies,
            self.word_frequencies,
        )
    }

    #[must_use]
    pub fn with_letter_frequencies(mut self, table: LetterFrequencies) -> Self {
        self.letter_frequencies = table;
        self
    }

    #[must_use]
    pub fn with_word_frequencies(mut self, table: WordFrequencies) -> Self {
        self.word_frequencies = table;
        self
    }

    /// Candidate dictionary in its original order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Membership test used for guess validation
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.valid_guesses.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub const fn letter_frequencies(&self) -> &LetterFrequencies {
        &self.letter_frequencies
    }

    #[inline]
    #[must_use]
    pub const fn word_frequencies(&self) -> &WordFrequencies {
        &self.word_frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn embedded_corpus_loads() {
        let corpus = Corpus::embedded().unwrap();
        assert_eq!(corpus.answers().len(), ANSWERS.len());
        assert!(corpus.letter_frequencies().get(b'e') > corpus.letter_frequencies().get(b'z'));
        assert!(corpus.word_frequencies().get("about") > 0.0);
    }

    #[test]
    fn answers_and_extras_are_valid_guesses() {
        let corpus = Corpus::embedded().unwrap();
        assert!(corpus.is_valid_guess("train"));
        assert!(corpus.is_valid_guess("TRAIN"));
        assert!(corpus.is_valid_guess(ALLOWED[0]));
        assert!(!corpus.is_valid_guess("zzzzz"));
    }

    #[test]
    fn duplicate_answers_are_dropped() {
        let corpus = Corpus::new(
            words(&["train", "grain", "train"]),
            &[],
            LetterFrequencies::default(),
            WordFrequencies::default(),
        );
        let texts: Vec<&str> = corpus.answers().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["train", "grain"]);
    }

    #[test]
    fn with_answers_keeps_previous_guesses_valid() {
        let corpus = Corpus::new(
            words(&["train"]),
            &words(&["aahed"]),
            LetterFrequencies::default(),
            WordFrequencies::default(),
        )
        .with_answers(words(&["grain"]));

        assert_eq!(corpus.answers().len(), 1);
        assert!(corpus.is_valid_guess("grain"));
        assert!(corpus.is_valid_guess("train"));
        assert!(corpus.is_valid_guess("aahed"));
    }
}
