//! Per-letter status shown on the on-screen keyboard

use crate::core::{CellStatus, LetterSet, Word};

/// Best known status of every letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatuses([CellStatus; 26]);

impl Default for LetterStatuses {
    fn default() -> Self {
        Self([CellStatus::Unguessed; 26])
    }
}

impl LetterStatuses {
    /// Fold a scored guess into the keyboard
    ///
    /// Green is final. Otherwise a letter is green when it matches the answer
    /// at that position, yellow when the answer has it elsewhere, gray if not.
    pub fn record(&mut self, guess: &Word, answer: &Word) {
        for (position, &letter) in guess.chars().iter().enumerate() {
            let slot = &mut self.0[usize::from(letter - b'a')];
            if *slot == CellStatus::Green {
                continue;
            }
            *slot = if answer.char_at(position) == letter {
                CellStatus::Green
            } else if answer.has_letter(letter) {
                CellStatus::Yellow
            } else {
                CellStatus::Gray
            };
        }
    }

    /// Status of a letter (`Unguessed` for anything not a lowercase letter)
    #[must_use]
    pub fn get(&self, letter: u8) -> CellStatus {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            CellStatus::Unguessed
        }
    }

    /// Letters known to be in the answer (yellow or green)
    #[must_use]
    pub fn hinted(&self) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&letter| matches!(self.get(letter), CellStatus::Yellow | CellStatus::Green))
            .collect()
    }
}
