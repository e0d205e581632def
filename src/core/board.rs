//! The 6×5 guess grid
//!
//! A `Board` pairs every cell's letter with its feedback status. It is the
//! snapshot the finder reads; the game state owns and edits it.

use super::status::{CellStatus, RowStatus, parse_row_status};
use super::word::{WORD_LEN, Word};
use std::fmt;

/// Number of guess rows on the board
pub const ROWS: usize = 6;

/// Error type for invalid board edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    RowOutOfRange(usize),
    ColumnOutOfRange(usize),
    InvalidLetter(char),
    InvalidGuess(String),
    InvalidFeedback(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange(row) => write!(f, "Row {row} is outside the board (0-5)"),
            Self::ColumnOutOfRange(col) => write!(f, "Column {col} is outside the board (0-4)"),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
            Self::InvalidGuess(s) => write!(f, "Guess '{s}' must be exactly 5 letters"),
            Self::InvalidFeedback(s) => {
                write!(f, "Invalid feedback '{s}': use 5 of G/Y/X (green, yellow, gray)")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// One filled cell as seen by the constraint extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub row: usize,
    pub col: usize,
    pub letter: u8,
    pub status: CellStatus,
}

/// Letters and feedback for all six rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    letters: [[Option<u8>; WORD_LEN]; ROWS],
    statuses: [RowStatus; ROWS],
}

fn check_position(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= ROWS {
        return Err(BoardError::RowOutOfRange(row));
    }
    if col >= WORD_LEN {
        return Err(BoardError::ColumnOutOfRange(col));
    }
    Ok(())
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `(guess, feedback)` rows, e.g. `("crane", "XGGYX")`
    ///
    /// # Errors
    /// Returns `BoardError` for more than six rows, a guess that is not five
    /// letters, or feedback that does not parse.
    ///
    /// # Examples
    /// ```
    /// use wordle_finder::core::{Board, CellStatus};
    ///
    /// let board = Board::from_rows(&[("crane", "xggyx")]).unwrap();
    /// assert_eq!(board.letter(0, 1), Some(b'r'));
    /// assert_eq!(board.status(0, 3), CellStatus::Yellow);
    /// assert!(board.is_scannable());
    /// ```
    pub fn from_rows(rows: &[(&str, &str)]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, &(guess, feedback)) in rows.iter().enumerate() {
            let statuses = parse_row_status(feedback)
                .ok_or_else(|| BoardError::InvalidFeedback(feedback.to_string()))?;
            board.fill_row(row, guess, statuses)?;
        }
        Ok(board)
    }

    /// Write a whole guess and its feedback into `row`
    ///
    /// The board is left unchanged when the guess is rejected.
    ///
    /// # Errors
    /// Returns `BoardError` if `row` is out of range or `guess` is not five letters.
    pub fn fill_row(
        &mut self,
        row: usize,
        guess: &str,
        statuses: RowStatus,
    ) -> Result<(), BoardError> {
        if row >= ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        let chars: Vec<char> = guess.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(BoardError::InvalidGuess(guess.to_string()));
        }
        if let Some(&bad) = chars.iter().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(BoardError::InvalidLetter(bad));
        }

        for (cell, ch) in self.letters[row].iter_mut().zip(chars) {
            *cell = Some(ch.to_ascii_lowercase() as u8);
        }
        self.statuses[row] = statuses;
        Ok(())
    }

    /// Place a letter; stored lowercase
    ///
    /// # Errors
    /// Returns `BoardError` for an out-of-range cell or a non-ASCII-letter character.
    pub fn set_letter(&mut self, row: usize, col: usize, ch: char) -> Result<(), BoardError> {
        check_position(row, col)?;
        if !ch.is_ascii_alphabetic() {
            return Err(BoardError::InvalidLetter(ch));
        }
        self.letters[row][col] = Some(ch.to_ascii_lowercase() as u8);
        Ok(())
    }

    /// Empty a cell and drop its feedback
    ///
    /// # Errors
    /// Returns `BoardError` for an out-of-range cell.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        check_position(row, col)?;
        self.letters[row][col] = None;
        self.statuses[row][col] = CellStatus::Unguessed;
        Ok(())
    }

    /// # Errors
    /// Returns `BoardError` for an out-of-range cell.
    pub fn set_status(
        &mut self,
        row: usize,
        col: usize,
        status: CellStatus,
    ) -> Result<(), BoardError> {
        check_position(row, col)?;
        self.statuses[row][col] = status;
        Ok(())
    }

    /// # Errors
    /// Returns `BoardError` if `row` is out of range.
    pub fn set_row_status(&mut self, row: usize, statuses: RowStatus) -> Result<(), BoardError> {
        if row >= ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        self.statuses[row] = statuses;
        Ok(())
    }

    /// Letter at a cell; `None` when empty or out of range
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<u8> {
        self.letters.get(row)?.get(col).copied().flatten()
    }

    /// Status at a cell; `Unguessed` when out of range
    #[must_use]
    pub fn status(&self, row: usize, col: usize) -> CellStatus {
        self.statuses
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn row_status(&self, row: usize) -> Option<&RowStatus> {
        self.statuses.get(row)
    }

    /// The row's guess, if all five cells are filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let letters = self.letters.get(row)?;
        let text: Option<String> = letters.iter().map(|l| l.map(char::from)).collect();
        Word::new(text?).ok()
    }

    #[must_use]
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.letters
            .get(row)
            .is_none_or(|letters| letters.iter().all(Option::is_none))
    }

    /// Coarse "fully typed or fully empty" test: first and last cells agree
    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        let first = self.letter(row, 0).is_some();
        let last = self.letter(row, WORD_LEN - 1).is_some();
        first == last
    }

    /// True when no row is partially typed, so the board can be scanned
    #[must_use]
    pub fn is_scannable(&self) -> bool {
        (0..ROWS).all(|row| self.is_row_complete(row))
    }

    /// Every filled cell in row-major order
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.letters.iter().enumerate().flat_map(move |(row, letters)| {
            letters.iter().enumerate().filter_map(move |(col, letter)| {
                letter.map(|letter| Mark {
                    row,
                    col,
                    letter,
                    status: self.statuses[row][col],
                })
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..WORD_LEN {
                let ch = self.letter(row, col).map_or('_', |l| l.to_ascii_uppercase() as char);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CellStatus::{Gray, Green, Unguessed, Yellow};
    use super::*;

    #[test]
    fn new_board_is_empty_and_scannable() {
        let board = Board::new();
        assert!(board.is_scannable());
        assert_eq!(board.marks().count(), 0);
        assert!((0..ROWS).all(|row| board.is_row_empty(row)));
    }

    #[test]
    fn letters_are_lowercased() {
        let mut board = Board::new();
        board.set_letter(0, 0, 'C').unwrap();
        assert_eq!(board.letter(0, 0), Some(b'c'));
    }

    #[test]
    fn invalid_edits_are_rejected() {
        let mut board = Board::new();
        assert_eq!(board.set_letter(6, 0, 'a'), Err(BoardError::RowOutOfRange(6)));
        assert_eq!(board.set_letter(0, 5, 'a'), Err(BoardError::ColumnOutOfRange(5)));
        assert_eq!(board.set_letter(0, 0, '3'), Err(BoardError::InvalidLetter('3')));
        assert!(Board::from_rows(&[("crane", "GGG")]).is_err());
        assert!(Board::from_rows(&[("cran", "GGGGG")]).is_err());
    }

    #[test]
    fn rejected_fill_leaves_row_untouched() {
        let mut board = Board::new();
        let result = board.fill_row(0, "cr3ne", [CellStatus::Gray; WORD_LEN]);

        assert_eq!(result, Err(BoardError::InvalidLetter('3')));
        assert!(board.is_row_empty(0));
        assert_eq!(board, Board::new());

        board.fill_row(0, "CRANE", [CellStatus::Gray; WORD_LEN]).unwrap();
        assert_eq!(board.row_word(0).unwrap().text(), "crane");
    }

    #[test]
    fn partially_typed_row_is_not_scannable() {
        let mut board = Board::new();
        for (col, ch) in "cra".chars().enumerate() {
            board.set_letter(0, col, ch).unwrap();
        }
        assert!(!board.is_row_complete(0));
        assert!(!board.is_scannable());

        board.set_letter(0, 3, 'n').unwrap();
        board.set_letter(0, 4, 'e').unwrap();
        assert!(board.is_scannable());
    }

    #[test]
    fn gate_only_checks_first_and_last_cells() {
        // Middle gaps slip through the coarse check
        let mut board = Board::new();
        board.set_letter(0, 0, 'c').unwrap();
        board.set_letter(0, 4, 'e').unwrap();
        assert!(board.is_scannable());
    }

    #[test]
    fn marks_are_row_major() {
        let board = Board::from_rows(&[("crane", "XGGYX"), ("train", "GGGGG")]).unwrap();
        let marks: Vec<Mark> = board.marks().collect();

        assert_eq!(marks.len(), 10);
        assert_eq!(marks[0], Mark { row: 0, col: 0, letter: b'c', status: Gray });
        assert_eq!(marks[3].status, Yellow);
        assert_eq!(marks[5], Mark { row: 1, col: 0, letter: b't', status: Green });
    }

    #[test]
    fn clear_cell_resets_status() {
        let mut board = Board::from_rows(&[("crane", "GGGGG")]).unwrap();
        board.clear_cell(0, 4).unwrap();
        assert_eq!(board.letter(0, 4), None);
        assert_eq!(board.status(0, 4), Unguessed);
        assert!(board.row_word(0).is_none());
    }

    #[test]
    fn row_word_reads_back_guess() {
        let board = Board::from_rows(&[("CRANE", "XXXXX")]).unwrap();
        assert_eq!(board.row_word(0).unwrap().text(), "crane");
        assert!(board.row_word(1).is_none());
    }

    #[test]
    fn boards_compare_by_value() {
        let a = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
        let b = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
        let c = Board::from_rows(&[("crane", "XGGXX")]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
