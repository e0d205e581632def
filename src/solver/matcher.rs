//! Candidate filtering
//!
//! Compiles a `ConstraintSet` into one letter class per position plus a set of
//! letters that must appear somewhere, then tests dictionary words against it.

use super::constraints::ConstraintSet;
use crate::core::{LetterSet, WORD_LEN, Word};

/// Per-position character classes compiled from constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFilter {
    classes: [LetterSet; WORD_LEN],
    required: LetterSet,
}

impl CandidateFilter {
    /// Build the filter
    ///
    /// A fixed position accepts only its letter. An open position accepts any
    /// letter except globally excluded ones and the letters ruled out at that
    /// position.
    #[must_use]
    pub fn compile(constraints: &ConstraintSet) -> Self {
        let excluded = constraints.globally_excluded();
        let classes = std::array::from_fn(|position| match constraints.fixed[position] {
            Some(letter) => LetterSet::single(letter),
            None => LetterSet::ALL
                .difference(excluded)
                .difference(constraints.excluded_at(position)),
        });

        Self {
            classes,
            required: constraints.required,
        }
    }

    /// The letters accepted at `position`
    #[must_use]
    pub const fn class(&self, position: usize) -> LetterSet {
        self.classes[position]
    }

    /// True if the word fits every class and contains every required letter
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.required.is_subset(word.letters())
            && word
                .chars()
                .iter()
                .zip(&self.classes)
                .all(|(&ch, class)| class.contains(ch))
    }
}

/// Keep the dictionary words consistent with the constraints, in dictionary order
///
/// # Examples
/// ```
/// use wordle_finder::core::{Board, Word};
/// use wordle_finder::solver::{ConstraintSet, filter_candidates};
///
/// let dictionary: Vec<Word> = ["train", "grain", "brand", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let board = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
///
/// let found = filter_candidates(&dictionary, &ConstraintSet::extract(&board));
/// let texts: Vec<&str> = found.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["train", "grain"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], constraints: &ConstraintSet) -> Vec<&'a Word> {
    let filter = CandidateFilter::compile(constraints);
    dictionary.iter().filter(|word| filter.matches(word)).collect()
}
