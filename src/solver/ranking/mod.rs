//! Candidate ranking
//!
//! Three independent passes each order the candidates best first. A word's
//! composite score is the weighted sum of its 0-based positions in the three
//! orderings, and the final order sorts that score ascending.

pub mod division;
pub mod letter_frequency;
pub mod word_frequency;

use crate::core::Word;
use crate::wordlists::Corpus;

/// Weights applied to each pass's rank position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankWeights {
    pub letter_frequency: f64,
    pub word_frequency: f64,
    pub division: f64,
}

impl RankWeights {
    pub const DEFAULT: Self = Self {
        letter_frequency: 1.0,
        word_frequency: 6.0,
        division: 2.0,
    };
}

impl Default for RankWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rank position of each candidate when ordered by descending score
///
/// Ties keep input order.
#[must_use]
pub fn positions_by_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut positions = vec![0; scores.len()];
    for (position, index) in order.into_iter().enumerate() {
        positions[index] = position;
    }
    positions
}

/// Order candidates best first
///
/// Input order (dictionary order) breaks every tie. Zero or one candidate is
/// returned unchanged.
///
/// # Examples
/// ```
/// use wordle_finder::core::Word;
/// use wordle_finder::solver::ranking::{RankWeights, rank};
/// use wordle_finder::wordlists::Corpus;
///
/// let corpus = Corpus::embedded().unwrap();
/// let words = [Word::new("train").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let ranked = rank(&refs, &corpus, RankWeights::default());
/// assert_eq!(ranked[0].text(), "train");
/// ```
#[must_use]
pub fn rank<'a>(candidates: &[&'a Word], corpus: &Corpus, weights: RankWeights) -> Vec<&'a Word> {
    if candidates.len() < 2 {
        return candidates.to_vec();
    }

    let passes = [
        (
            letter_frequency::scores(candidates, corpus.letter_frequencies()),
            weights.letter_frequency,
        ),
        (
            word_frequency::scores(candidates, corpus.word_frequencies()),
            weights.word_frequency,
        ),
        (division::scores(candidates), weights.division),
    ];

    let mut composite = vec![0.0; candidates.len()];
    for (scores, weight) in &passes {
        for (total, position) in composite.iter_mut().zip(positions_by_descending(scores)) {
            *total += position as f64 * weight;
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| composite[a].total_cmp(&composite[b]));
    order.into_iter().map(|index| candidates[index]).collect()
}
