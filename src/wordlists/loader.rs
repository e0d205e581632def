//! Word list and frequency table loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{CorpusError, LetterFrequencies, WordFrequencies};
use crate::core::Word;
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load words from a newline-separated file
///
/// Returns the valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read and
/// `CorpusError::EmptyDictionary` if no line holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_finder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let content = read(path)?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    if words.is_empty() {
        return Err(CorpusError::EmptyDictionary(path.display().to_string()));
    }

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a letter frequency table from a JSON file
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read or is not a JSON object of numbers.
pub fn load_letter_frequencies<P: AsRef<Path>>(path: P) -> Result<LetterFrequencies, CorpusError> {
    let path = path.as_ref();
    LetterFrequencies::from_json(&read(path)?, &path.display().to_string())
}

/// Load a word frequency table from a JSON file
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read or is not a JSON object of numbers.
pub fn load_word_frequencies<P: AsRef<Path>>(path: P) -> Result<WordFrequencies, CorpusError> {
    let path = path.as_ref();
    WordFrequencies::from_json(&read(path)?, &path.display().to_string())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_finder::wordlists::loader::words_from_slice;
/// use wordle_finder::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
