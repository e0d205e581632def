//! Solution-division pass
//!
//! Prefers words whose letters split the remaining candidates closest to
//! half and half.

use crate::core::Word;

/// Fraction of candidates containing each letter, indexed `a..=z`
#[must_use]
pub fn presence_fractions(candidates: &[&Word]) -> [f64; 26] {
    let mut counts = [0usize; 26];
    for word in candidates {
        for letter in word.letters().iter() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }

    let total = candidates.len().max(1) as f64;
    counts.map(|count| count as f64 / total)
}

/// Split value of a presence fraction, peaking at 0.5
#[inline]
#[must_use]
pub fn split_value(fraction: f64) -> f64 {
    0.5 - (0.5 - fraction).abs()
}

/// Sum of split values over each candidate's distinct letters, higher is better
///
/// # Examples
/// ```
/// use wordle_finder::core::Word;
/// use wordle_finder::solver::ranking::division;
///
/// let words = [Word::new("train").unwrap(), Word::new("grain").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// // t and g each split the pair in half, the shared letters split nothing
/// let scores = division::scores(&refs);
/// assert!((scores[0] - 0.5).abs() < 1e-9);
/// assert!((scores[1] - 0.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn scores(candidates: &[&Word]) -> Vec<f64> {
    let fractions = presence_fractions(candidates);
    candidates
        .iter()
        .map(|word| {
            word.letters()
                .iter()
                .map(|letter| split_value(fractions[usize::from(letter - b'a')]))
                .sum()
        })
        .collect()
}
