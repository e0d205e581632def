//! Formatting utilities for terminal output

use crate::core::{CellStatus, RowStatus, Word};
use colored::{ColoredString, Colorize};

/// A guess with each letter on its feedback colour
#[must_use]
pub fn colored_row(word: &str, statuses: &RowStatus) -> String {
    word.chars()
        .zip(statuses)
        .map(|(ch, status)| colored_letter(ch, *status).to_string())
        .collect()
}

/// One letter as a coloured tile
#[must_use]
pub fn colored_letter(ch: char, status: CellStatus) -> ColoredString {
    let tile = format!(" {} ", ch.to_ascii_uppercase());
    match status {
        CellStatus::Green => tile.black().on_green().bold(),
        CellStatus::Yellow => tile.black().on_yellow().bold(),
        CellStatus::Gray => tile.white().on_bright_black(),
        CellStatus::Unguessed => tile.normal(),
    }
}

/// Candidates laid out in numbered columns
#[must_use]
pub fn candidate_columns(words: &[&Word], columns: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .enumerate()
        .map(|(chunk_index, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    format!(
                        "{:>3}. {}",
                        chunk_index * columns.max(1) + i + 1,
                        word.text().to_uppercase()
                    )
                })
                .collect::<Vec<_>>()
                .join("   ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn candidate_columns_numbers_words() {
        let words = words_from_slice(&["train", "grain", "brain"]);
        let refs: Vec<&Word> = words.iter().collect();

        let lines = candidate_columns(&refs, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1. TRAIN     2. GRAIN");
        assert_eq!(lines[1], "  3. BRAIN");
    }

    #[test]
    fn colored_row_keeps_letters() {
        colored::control::set_override(false);
        let row = colored_row("crane", &[CellStatus::Gray; 5]);
        assert_eq!(row, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
