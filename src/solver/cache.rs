//! Memoization of solver results by board snapshot

use super::engine::{Solutions, Solver};
use crate::core::Board;

/// Remembers the solutions of the last board it was asked about
///
/// Redraws that leave the board untouched reuse the previous result.
#[derive(Debug, Default)]
pub struct SolutionCache<'a> {
    snapshot: Option<Board>,
    solutions: Solutions<'a>,
}

impl<'a> SolutionCache<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solutions for `board`, recomputed only when it differs from the last call
    pub fn get(&mut self, solver: &Solver<'a>, board: &Board) -> &Solutions<'a> {
        if self.snapshot.as_ref() != Some(board) {
            self.solutions = solver.solutions(board);
            self.snapshot = Some(board.clone());
        }
        &self.solutions
    }

    /// The most recently computed solutions
    #[must_use]
    pub const fn solutions(&self) -> &Solutions<'a> {
        &self.solutions
    }

    /// Forget the stored snapshot
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    #[must_use]
    pub fn is_current(&self, board: &Board) -> bool {
        self.snapshot.as_ref() == Some(board)
    }
}
