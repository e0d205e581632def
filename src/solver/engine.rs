//! Main Wordle finder interface

use super::constraints::ConstraintSet;
use super::matcher::filter_candidates;
use super::ranking::{RankWeights, rank};
use crate::core::{Board, Word};
use crate::wordlists::Corpus;

/// Default number of suggestions shown to the player
pub const DISPLAY_WINDOW: usize = 20;

/// Ranked candidates for one board snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solutions<'a> {
    pub words: Vec<&'a Word>,
    pub total: usize,
}

impl<'a> Solutions<'a> {
    #[must_use]
    pub fn new(words: Vec<&'a Word>) -> Self {
        let total = words.len();
        Self { words, total }
    }

    /// The best `n` candidates
    #[must_use]
    pub fn top(&self, n: usize) -> &[&'a Word] {
        &self.words[..n.min(self.words.len())]
    }

    #[must_use]
    pub fn best(&self) -> Option<&'a Word> {
        self.words.first().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Main Wordle finder
///
/// Stateless between calls: every query reads a board snapshot and the
/// borrowed corpus.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    corpus: &'a Corpus,
    weights: RankWeights,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(corpus: &'a Corpus, weights: RankWeights) -> Self {
        Self { corpus, weights }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn weights(&self) -> RankWeights {
        self.weights
    }

    /// Every dictionary word consistent with the board, best first
    ///
    /// A board with a half-typed row yields no solutions.
    ///
    /// # Examples
    /// ```
    /// use wordle_finder::core::Board;
    /// use wordle_finder::solver::{RankWeights, Solver};
    /// use wordle_finder::wordlists::Corpus;
    ///
    /// let corpus = Corpus::embedded().unwrap();
    /// let solver = Solver::new(&corpus, RankWeights::default());
    ///
    /// let board = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
    /// let solutions = solver.solutions(&board);
    /// assert!(solutions.words.iter().any(|w| w.text() == "train"));
    /// assert_eq!(solutions.total, solutions.words.len());
    /// ```
    #[must_use]
    pub fn solutions(&self, board: &Board) -> Solutions<'a> {
        if !board.is_scannable() {
            log::debug!("Board has a partially filled row, skipping search");
            return Solutions::default();
        }

        let constraints = ConstraintSet::extract(board);
        let candidates = self.candidates(&constraints);
        let ranked = rank(&candidates, self.corpus, self.weights);
        log::debug!(
            "{} of {} words match the board",
            ranked.len(),
            self.corpus.answers().len()
        );

        Solutions::new(ranked)
    }

    /// Filtered candidates in dictionary order
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintSet) -> Vec<&'a Word> {
        filter_candidates(self.corpus.answers(), constraints)
    }

    /// The top-ranked candidate for the board, if any
    #[must_use]
    pub fn next_guess(&self, board: &Board) -> Option<&'a Word> {
        self.solutions(board).best()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(corpus: &Corpus) -> Solver<'_> {
        Solver::new(corpus, RankWeights::default())
    }

    #[test]
    fn empty_board_returns_whole_dictionary() {
        let corpus = Corpus::embedded().unwrap();
        let solutions = solver(&corpus).solutions(&Board::new());
        assert_eq!(solutions.total, corpus.answers().len());
    }

    #[test]
    fn partial_row_short_circuits() {
        let corpus = Corpus::embedded().unwrap();
        let mut board = Board::new();
        for (col, ch) in "cra".chars().enumerate() {
            board.set_letter(0, col, ch).unwrap();
        }

        let solutions = solver(&corpus).solutions(&board);
        assert!(solutions.is_empty());
        assert_eq!(solutions.total, 0);
    }

    #[test]
    fn solutions_are_idempotent() {
        let corpus = Corpus::embedded().unwrap();
        let board = Board::from_rows(&[("slate", "XXYXX"), ("crane", "XGGXX")]).unwrap();
        let solver = solver(&corpus);

        assert_eq!(solver.solutions(&board), solver.solutions(&board));
    }

    #[test]
    fn crane_against_train() {
        let corpus = Corpus::embedded().unwrap();
        let board = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
        let solutions = solver(&corpus).solutions(&board);

        let texts: Vec<&str> = solutions.words.iter().map(|w| w.text()).collect();
        assert!(texts.contains(&"train"));
        assert!(texts.contains(&"grain"));
        assert!(!texts.contains(&"crane"));
        assert!(!texts.contains(&"brand"));
    }

    #[test]
    fn everyday_answers_survive_filtering() {
        let corpus = Corpus::embedded().unwrap();
        for answer in ["cigar", "sissy", "humph", "focal", "nymph"] {
            assert!(corpus.is_valid_guess(answer), "{answer} is not a valid guess");
        }

        // Hidden word CIGAR
        let board = Board::from_rows(&[("crane", "GYYXX")]).unwrap();
        let solutions = solver(&corpus).solutions(&board);
        assert!(solutions.words.iter().any(|w| w.text() == "cigar"));
    }

    #[test]
    fn no_match_yields_empty_solutions() {
        let corpus = Corpus::embedded().unwrap();
        let board = Board::from_rows(&[("crane", "GGGGG"), ("slate", "GGGGG")]).unwrap();

        let solutions = solver(&corpus).solutions(&board);
        assert!(solutions.is_empty());
        assert_eq!(solver(&corpus).next_guess(&board), None);
    }

    #[test]
    fn top_clamps_to_available() {
        let words = crate::wordlists::loader::words_from_slice(&["train", "grain"]);
        let solutions = Solutions::new(words.iter().collect());

        assert_eq!(solutions.top(DISPLAY_WINDOW).len(), 2);
        assert_eq!(solutions.top(1).len(), 1);
        assert_eq!(solutions.best().map(Word::text), Some("train"));
    }
}
