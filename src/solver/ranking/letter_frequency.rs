//! Letter-frequency pass
//!
//! Scores a word by the corpus frequency of its letters, with a bonus that
//! shrinks as the word repeats letters.

use crate::core::{WORD_LEN, Word};
use crate::wordlists::LetterFrequencies;

/// Weight of the distinct-letter bonus relative to the best letter sum
pub const REPEAT_BONUS: f64 = 0.2;

/// Sum of the frequencies of the word's five letters
#[inline]
#[must_use]
pub fn letter_sum(word: &Word, table: &LetterFrequencies) -> f64 {
    word.chars().iter().map(|&ch| table.get(ch)).sum()
}

/// Score every candidate, higher is better
///
/// `score = letter_sum + REPEAT_BONUS × largest × (5 − max_repeat)` where
/// `largest` is the highest letter sum among the candidates.
///
/// # Examples
/// ```
/// use wordle_finder::core::Word;
/// use wordle_finder::solver::ranking::letter_frequency;
/// use wordle_finder::wordlists::LetterFrequencies;
///
/// let table = LetterFrequencies::from_json(r#"{"a": 8.2, "e": 12.7, "l": 4.0, "s": 6.3, "t": 9.1}"#, "demo").unwrap();
/// let words = [Word::new("seels").unwrap(), Word::new("slate").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let scores = letter_frequency::scores(&refs, &table);
/// assert!(scores[1] > scores[0]);
/// ```
#[must_use]
pub fn scores(candidates: &[&Word], table: &LetterFrequencies) -> Vec<f64> {
    let sums: Vec<f64> = candidates.iter().map(|word| letter_sum(word, table)).collect();
    let largest = sums.iter().copied().fold(0.0, f64::max);

    candidates
        .iter()
        .zip(sums)
        .map(|(word, sum)| {
            let distinct_bonus = (WORD_LEN - word.max_repeat()) as f64;
            sum + REPEAT_BONUS * largest * distinct_bonus
        })
        .collect()
}
