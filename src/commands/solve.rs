//! Word solving command
//!
//! Plays a game against a known target, always guessing the top-ranked
//! candidate, and records the path.

use crate::core::{Board, ROWS, RowStatus, Word, is_solved, score_guess};
use crate::solver::Solver;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: ROWS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub statuses: RowStatus,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Runners-up shown alongside the guess
    pub alternatives: Vec<String>,
}

const ALTERNATIVES: usize = 4;

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the candidate dictionary
/// - The solver runs out of candidates
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, String> {
    let target = Word::new(config.target.as_str())
        .map_err(|e| format!("Invalid target word: {e}"))?;
    if !solver.corpus().answers().contains(&target) {
        return Err(format!(
            "'{}' is not in the answer list",
            target.text().to_uppercase()
        ));
    }

    let mut board = Board::new();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut candidates_before = solver.solutions(&board).total;

    for row in 0..config.max_guesses.min(ROWS) {
        let solutions = solver.solutions(&board);
        let guess = solutions
            .best()
            .ok_or_else(|| "No candidates remaining".to_string())?;
        let alternatives = solutions
            .top(ALTERNATIVES + 1)
            .iter()
            .skip(1)
            .map(|word| word.text().to_string())
            .collect();

        let statuses = score_guess(guess, &target);
        board
            .fill_row(row, guess.text(), statuses)
            .map_err(|e| e.to_string())?;

        let candidates_after = solver.solutions(&board).total;
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            statuses,
            candidates_before,
            candidates_after,
            alternatives,
        });
        candidates_before = candidates_after;

        if is_solved(&statuses) {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
