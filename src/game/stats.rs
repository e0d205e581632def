//! Win/loss bookkeeping across games

use crate::core::ROWS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub longest_streak: usize,
    /// Wins by number of guesses used (index 0 = one guess)
    pub guess_distribution: [usize; ROWS],
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.longest_streak = self.longest_streak.max(self.current_streak);
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|index| self.guess_distribution.get_mut(index))
        {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
