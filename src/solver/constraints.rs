//! Constraint extraction from board feedback
//!
//! Folds every filled cell of the board into a `ConstraintSet`. The fold is
//! order-independent except for green conflicts, where the first green seen in
//! row-major order is kept.

use crate::core::{Board, CellStatus, LetterSet, Mark, WORD_LEN};

/// A green mark that disagreed with an earlier green at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenConflict {
    pub position: usize,
    pub kept: u8,
    pub rejected: u8,
}

/// Everything the board says about the hidden word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Letters marked gray anywhere
    pub excluded: LetterSet,
    /// Letters marked gray, per position
    pub gray_positions: [LetterSet; WORD_LEN],
    /// Letters marked yellow, per position (present, but not here)
    pub misplaced: [LetterSet; WORD_LEN],
    /// Letters that must appear somewhere (yellow or green)
    pub required: LetterSet,
    /// Confirmed letter per position
    pub fixed: [Option<u8>; WORD_LEN],
    /// Green marks rejected because the position was already fixed
    pub conflicts: Vec<GreenConflict>,
}

impl ConstraintSet {
    /// Derive the constraints of a board
    ///
    /// Cells without feedback contribute nothing. Callers gate partially typed
    /// boards with [`Board::is_scannable`] before extracting.
    ///
    /// # Examples
    /// ```
    /// use wordle_finder::core::Board;
    /// use wordle_finder::solver::ConstraintSet;
    ///
    /// let board = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
    /// let constraints = ConstraintSet::extract(&board);
    ///
    /// assert_eq!(constraints.fixed[1], Some(b'r'));
    /// assert!(constraints.excluded.contains(b'c'));
    /// assert!(constraints.misplaced[3].contains(b'n'));
    /// ```
    #[must_use]
    pub fn extract(board: &Board) -> Self {
        board.marks().fold(Self::default(), Self::with_mark)
    }

    /// Fold one filled cell into the constraints
    #[must_use]
    pub fn with_mark(mut self, mark: Mark) -> Self {
        let Mark {
            row,
            col,
            letter,
            status,
        } = mark;
        let letter = letter.to_ascii_lowercase();

        match status {
            CellStatus::Unguessed => {}
            CellStatus::Gray => {
                self.excluded.insert(letter);
                self.gray_positions[col].insert(letter);
            }
            CellStatus::Yellow => {
                self.misplaced[col].insert(letter);
                self.required.insert(letter);
            }
            CellStatus::Green => {
                match self.fixed[col] {
                    Some(kept) if kept != letter => {
                        log::warn!(
                            "Green '{}' at row {row}, column {col} conflicts with '{}'; keeping '{}'",
                            letter as char,
                            kept as char,
                            kept as char
                        );
                        self.conflicts.push(GreenConflict {
                            position: col,
                            kept,
                            rejected: letter,
                        });
                    }
                    Some(_) => {}
                    None => self.fixed[col] = Some(letter),
                }
                self.required.insert(letter);
            }
        }

        self
    }

    /// Gray letters that are not required anywhere: absent from the whole word
    ///
    /// A gray letter that is also yellow or green (a duplicate letter in a
    /// guess) only rules out the cells where it was gray.
    #[must_use]
    pub const fn globally_excluded(&self) -> LetterSet {
        self.excluded.difference(self.required)
    }

    /// Letters ruled out at `position` by yellow marks and by reconciled gray marks
    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        let reconciled_gray = self.gray_positions[position].intersection(self.required);
        self.misplaced[position].union(reconciled_gray)
    }

    /// True when the board carried no feedback at all
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.excluded.is_empty()
            && self.required.is_empty()
            && self.fixed.iter().all(Option::is_none)
    }
}
