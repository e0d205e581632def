//! Word-frequency pass: common words first

use crate::core::Word;
use crate::wordlists::WordFrequencies;

/// Usage frequency of each candidate; words missing from the table score 0
#[must_use]
pub fn scores(candidates: &[&Word], table: &WordFrequencies) -> Vec<f64> {
    candidates.iter().map(|word| table.get(word.text())).collect()
}
