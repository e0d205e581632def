//! Static frequency tables used by the ranker
//!
//! Both tables are JSON objects mapping a key to a number, e.g.
//! `{"e": 12.7, "t": 9.06}` for letters and `{"about": 1800.0}` for words.

use super::CorpusError;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Key → number object as it appears on disk
#[derive(Deserialize)]
#[serde(transparent)]
struct RawTable(FxHashMap<String, f64>);

impl RawTable {
    fn parse(json: &str, origin: &str) -> Result<Self, CorpusError> {
        serde_json::from_str(json).map_err(|source| CorpusError::Json {
            origin: origin.to_string(),
            source,
        })
    }
}

/// Letter → frequency weight
///
/// Letters missing from the source table weigh 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies([f64; 26]);

impl LetterFrequencies {
    /// Parse a JSON letter table
    ///
    /// Keys are case-insensitive; keys that are not a single ASCII letter are
    /// skipped with a warning.
    ///
    /// # Errors
    /// Returns `CorpusError::Json` if the input is not an object of numbers.
    ///
    /// # Examples
    /// ```
    /// use wordle_finder::wordlists::LetterFrequencies;
    ///
    /// let table = LetterFrequencies::from_json(r#"{"e": 12.7, "Z": 0.07}"#, "inline").unwrap();
    /// assert!((table.get(b'e') - 12.7).abs() < 1e-9);
    /// assert!((table.get(b'z') - 0.07).abs() < 1e-9);
    /// assert_eq!(table.get(b'q'), 0.0);
    /// ```
    pub fn from_json(json: &str, origin: &str) -> Result<Self, CorpusError> {
        let RawTable(raw) = RawTable::parse(json, origin)?;

        let mut weights = [0.0; 26];
        for (key, value) in raw {
            match key.as_bytes() {
                [letter] if letter.is_ascii_alphabetic() => {
                    weights[usize::from(letter.to_ascii_lowercase() - b'a')] = value;
                }
                _ => log::warn!("{origin}: ignoring letter frequency key {key:?}"),
            }
        }

        Ok(Self(weights))
    }

    /// Weight of a lowercase letter (0 for anything else)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            0.0
        }
    }
}

impl Default for LetterFrequencies {
    fn default() -> Self {
        Self([0.0; 26])
    }
}

/// Word → usage frequency weight
///
/// Words missing from the table weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencies(FxHashMap<String, f64>);

impl WordFrequencies {
    /// Parse a JSON word table; keys are lowercased
    ///
    /// # Errors
    /// Returns `CorpusError::Json` if the input is not an object of numbers.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, CorpusError> {
        let RawTable(raw) = RawTable::parse(json, origin)?;

        Ok(raw
            .into_iter()
            .map(|(word, value)| (word.to_lowercase(), value))
            .collect())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.0.get(word).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
