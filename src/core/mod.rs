//! Core domain types for Wordle
//!
//! Words, letter sets, cell feedback and the guess board. These types carry no
//! knowledge of dictionaries or ranking; everything here is pure and cheap to copy.

mod board;
mod letters;
mod status;
mod word;

pub use board::{Board, BoardError, Mark, ROWS};
pub use letters::LetterSet;
pub use status::{
    CellStatus, RowStatus, is_solved, parse_row_status, row_to_emoji, score_guess,
};
pub use word::{WORD_LEN, Word, WordError};
