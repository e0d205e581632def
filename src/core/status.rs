//! Per-cell feedback
//!
//! `CellStatus` is the colour of one board cell. Scoring a guess against a
//! hidden answer follows Wordle's duplicate-letter rules: greens are claimed
//! first, then yellows are handed out left to right while unclaimed copies of
//! the letter remain.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback attached to a single board cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// No feedback yet (empty cell or row not scored)
    #[default]
    Unguessed,
    /// Letter is absent from the hidden word
    Gray,
    /// Letter is present but not at this position
    Yellow,
    /// Letter is confirmed at this position
    Green,
}

/// Feedback for a whole row
pub type RowStatus = [CellStatus; WORD_LEN];

impl CellStatus {
    /// Next status when the player clicks a scored cell in assist mode
    ///
    /// An unscored cell becomes gray; scored cells rotate gray → yellow → green → gray.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Unguessed | Self::Green => Self::Gray,
            Self::Gray => Self::Yellow,
            Self::Yellow => Self::Green,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - 'X'/'x'/'-'/'_'/'.'/⬜/⬛ for gray
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'X' | 'x' | '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
            Self::Unguessed => '·',
        }
    }

    /// True for any status carrying feedback
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Unguessed)
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unguessed => "unguessed",
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// Parse a row of feedback such as "XGGYX" or "⬜🟩🟩🟨⬜"
///
/// # Examples
/// ```
/// use wordle_finder::core::{CellStatus, parse_row_status};
///
/// let row = parse_row_status("xggy-").unwrap();
/// assert_eq!(row[1], CellStatus::Green);
/// assert_eq!(row[3], CellStatus::Yellow);
/// assert!(parse_row_status("GGG").is_none());
/// ```
#[must_use]
pub fn parse_row_status(s: &str) -> Option<RowStatus> {
    let parsed: Vec<CellStatus> = s
        .chars()
        .map(CellStatus::from_char)
        .collect::<Option<_>>()?;
    parsed.try_into().ok()
}

/// Render a row of feedback as emoji
#[must_use]
pub fn row_to_emoji(row: &RowStatus) -> String {
    row.iter().map(|status| status.to_emoji()).collect()
}

/// Score `guess` against the hidden `answer`
///
/// # Examples
/// ```
/// use wordle_finder::core::{CellStatus::*, Word, score_guess};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("train").unwrap();
/// assert_eq!(score_guess(&guess, &answer), [Gray, Green, Green, Yellow, Gray]);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, answer: &Word) -> RowStatus {
    let mut result = [CellStatus::Gray; WORD_LEN];
    let mut available = [0u8; 26];

    // Greens first; letters not matched in place stay available for yellows
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = CellStatus::Green;
        } else {
            available[usize::from(a - b'a')] += 1;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == CellStatus::Green {
            continue;
        }
        let slot = &mut available[usize::from(g - b'a')];
        if *slot > 0 {
            result[i] = CellStatus::Yellow;
            *slot -= 1;
        }
    }

    result
}

/// True if every cell of the row is green
#[must_use]
pub fn is_solved(row: &RowStatus) -> bool {
    row.iter().all(|&status| status == CellStatus::Green)
}
