//! One-shot suggestions from typed feedback rows
//!
//! Rows are written `GUESS=FEEDBACK` (or `GUESS FEEDBACK`), e.g. `crane=xggyx`.

use crate::core::{Board, ROWS, RowStatus, Word, parse_row_status};
use crate::solver::{Solutions, Solver};

/// Parse one `GUESS=FEEDBACK` entry
///
/// # Errors
/// Returns a message naming the part that failed to parse.
///
/// # Examples
/// ```
/// use wordle_finder::commands::parse_row_entry;
/// use wordle_finder::core::CellStatus;
///
/// let (guess, statuses) = parse_row_entry("CRANE=xggyx").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(statuses[3], CellStatus::Yellow);
/// ```
pub fn parse_row_entry(entry: &str) -> Result<(Word, RowStatus), String> {
    let entry = entry.trim();
    let (guess, feedback) = entry
        .split_once('=')
        .or_else(|| entry.split_once(char::is_whitespace))
        .ok_or_else(|| format!("Expected GUESS=FEEDBACK, got '{entry}'"))?;

    let word = Word::new(guess.trim()).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let statuses = parse_row_status(feedback.trim())
        .ok_or_else(|| format!("Invalid feedback '{feedback}' (use G/Y/X per letter)"))?;

    Ok((word, statuses))
}

/// Build a board from already-parsed rows
///
/// # Errors
/// Returns an error when there are more rows than the board holds.
pub fn board_from_rows(rows: &[(Word, RowStatus)]) -> Result<Board, String> {
    if rows.len() > ROWS {
        return Err(format!("At most {ROWS} rows fit on the board, got {}", rows.len()));
    }

    let mut board = Board::new();
    for (row, (word, statuses)) in rows.iter().enumerate() {
        board
            .fill_row(row, word.text(), *statuses)
            .map_err(|e| e.to_string())?;
    }
    Ok(board)
}

/// Rank the candidates for the given entries
///
/// # Errors
/// Returns an error if an entry does not parse or there are too many rows.
pub fn suggest<'a, S: AsRef<str>>(
    entries: &[S],
    solver: &Solver<'a>,
) -> Result<Solutions<'a>, String> {
    let rows = entries
        .iter()
        .map(|entry| parse_row_entry(entry.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let board = board_from_rows(&rows)?;
    Ok(solver.solutions(&board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;
    use crate::solver::RankWeights;
    use crate::wordlists::Corpus;

    #[test]
    fn parses_both_separators() {
        let (word, statuses) = parse_row_entry("crane XGGYX").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(statuses[0], CellStatus::Gray);
        assert_eq!(statuses[1], CellStatus::Green);

        let (word, _) = parse_row_entry(" slate=-----").unwrap();
        assert_eq!(word.text(), "slate");
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(parse_row_entry("crane").is_err());
        assert!(parse_row_entry("cran=XGGYX").is_err());
        assert!(parse_row_entry("crane=XGGY").is_err());
        assert!(parse_row_entry("crane=XGGYQ").is_err());
    }

    #[test]
    fn too_many_rows() {
        let rows: Vec<_> = (0..=ROWS)
            .map(|_| parse_row_entry("crane=XXXXX").unwrap())
            .collect();
        assert!(board_from_rows(&rows).is_err());
    }

    #[test]
    fn suggest_ranks_consistent_words() {
        let corpus = Corpus::embedded().unwrap();
        let solver = Solver::new(&corpus, RankWeights::default());

        let solutions = suggest(&["crane=XGGYX"], &solver).unwrap();
        assert!(solutions.total > 0);
        assert!(solutions.words.iter().any(|w| w.text() == "train"));
        assert!(solutions.words.iter().all(|w| w.text() != "brand"));
    }

    #[test]
    fn no_entries_lists_everything() {
        let corpus = Corpus::embedded().unwrap();
        let solver = Solver::new(&corpus, RankWeights::default());

        let solutions = suggest::<&str>(&[], &solver).unwrap();
        assert_eq!(solutions.total, corpus.answers().len());
    }
}
