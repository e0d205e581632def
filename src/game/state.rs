//! Game-state machine around the board

use super::difficulty::{Difficulty, GuessRejection, Hints, validate_guess};
use super::keyboard::LetterStatuses;
use super::stats::Statistics;
use crate::core::{
    Board, BoardError, CellStatus, ROWS, RowStatus, WORD_LEN, Word, is_solved, score_guess,
};
use crate::wordlists::Corpus;
use rand::prelude::IndexedRandom;

/// How rows get their feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Guesses are scored against a hidden answer
    Play,
    /// The player copies guesses and colours from another game
    Assist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Board, cursor and outcome of one game plus statistics across games
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    answer: Word,
    mode: Mode,
    difficulty: Difficulty,
    state: GameState,
    row: usize,
    col: usize,
    letter_statuses: LetterStatuses,
    greens: [Option<u8>; WORD_LEN],
    stats: Statistics,
}

impl Game {
    #[must_use]
    pub fn new(answer: Word, mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            answer,
            mode,
            difficulty,
            state: GameState::Playing,
            row: 0,
            col: 0,
            letter_statuses: LetterStatuses::default(),
            greens: [None; WORD_LEN],
            stats: Statistics::default(),
        }
    }

    /// Pick a hidden answer uniformly from the corpus
    #[must_use]
    pub fn random_answer(corpus: &Corpus) -> Option<Word> {
        corpus.answers().choose(&mut rand::rng()).cloned()
    }

    /// Clear the board for another round; statistics carry over
    ///
    /// An assist-mode game counts as won only if its board is still solved
    /// when it is left.
    pub fn restart(&mut self, answer: Word) {
        if let (Mode::Assist, Some(row)) = (self.mode, self.solved_row()) {
            self.stats.record_win(row + 1);
        }
        *self = Self {
            stats: std::mem::take(&mut self.stats),
            ..Self::new(answer, self.mode, self.difficulty)
        };
    }

    /// Type a letter at the cursor
    ///
    /// In play mode a full row waits for [`Game::submit`]. In assist mode the
    /// fifth letter commits the row with every cell gray.
    ///
    /// # Errors
    /// Returns `BoardError::InvalidLetter` for anything but an ASCII letter.
    pub fn add_letter(&mut self, ch: char) -> Result<(), BoardError> {
        if self.state != GameState::Playing || self.row >= ROWS || self.col >= WORD_LEN {
            return Ok(());
        }

        self.board.set_letter(self.row, self.col, ch)?;
        self.col += 1;

        if self.mode == Mode::Assist && self.col == WORD_LEN {
            self.board
                .set_row_status(self.row, [CellStatus::Gray; WORD_LEN])?;
            self.row += 1;
            self.col = 0;
        }
        Ok(())
    }

    /// Erase the letter before the cursor
    ///
    /// In assist mode deleting at the start of a row reopens the previous row.
    pub fn delete_letter(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        if self.col == 0 {
            if self.mode == Mode::Play || self.row == 0 {
                return;
            }
            self.row -= 1;
            self.col = WORD_LEN;
        }

        self.col -= 1;
        let cleared = self.board.clear_cell(self.row, self.col);
        debug_assert!(cleared.is_ok(), "cursor left the board");
    }

    /// The letters typed in the current row
    #[must_use]
    pub fn pending_guess(&self) -> String {
        (0..WORD_LEN)
            .filter_map(|col| self.board.letter(self.row, col))
            .map(char::from)
            .collect()
    }

    /// Score the current row against the answer (play mode)
    ///
    /// # Errors
    /// Returns the rejection message when the guess breaks the difficulty rules.
    pub fn submit(&mut self, corpus: &Corpus) -> Result<RowStatus, GuessRejection> {
        let guess = self.pending_guess();
        let hints = Hints {
            letters: Some(&self.letter_statuses),
            greens: self.greens,
        };
        validate_guess(&guess, self.difficulty, corpus, &hints)?;

        let word = Word::new(guess).map_err(|_| GuessRejection::Incomplete)?;
        let statuses = score_guess(&word, &self.answer);
        self.board
            .set_row_status(self.row, statuses)
            .map_err(|_| GuessRejection::Incomplete)?;

        for (position, status) in statuses.iter().enumerate() {
            if *status == CellStatus::Green {
                self.greens[position] = Some(word.char_at(position));
            }
        }
        self.letter_statuses.record(&word, &self.answer);

        self.row += 1;
        self.col = 0;
        self.update_state();
        Ok(statuses)
    }

    /// Advance the colour of a committed cell (assist mode)
    ///
    /// Returns `false` when the cell is not part of a committed row.
    pub fn cycle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.mode != Mode::Assist || row >= self.row || col >= WORD_LEN {
            return false;
        }

        let next = self.board.status(row, col).cycle();
        if self.board.set_status(row, col, next).is_err() {
            return false;
        }
        self.update_state();
        true
    }

    /// The latest scored row, when it is all green
    fn solved_row(&self) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.board.status(row, 0) != CellStatus::Unguessed)
            .filter(|&row| self.board.row_status(row).is_some_and(is_solved))
    }

    /// Win when the latest scored row is all green; in play mode a full board loses
    ///
    /// Play-mode outcomes are final. Assist-mode feedback can be recoloured, so
    /// the state follows the board and statistics wait for [`Game::restart`].
    fn update_state(&mut self) {
        if self.mode == Mode::Assist {
            let next = if self.solved_row().is_some() {
                GameState::Won
            } else {
                GameState::Playing
            };
            if next != self.state {
                log::debug!("Assist board is now {next:?}");
            }
            self.state = next;
            return;
        }

        if self.state != GameState::Playing {
            return;
        }

        if let Some(row) = self.solved_row() {
            self.state = GameState::Won;
            self.stats.record_win(row + 1);
            log::debug!("Game won in {} guesses", row + 1);
        } else if self.row == ROWS {
            self.state = GameState::Lost;
            self.stats.record_loss();
            log::debug!("Game lost, answer was {}", self.answer);
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Cursor as `(row, col)`
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub const fn letter_statuses(&self) -> &LetterStatuses {
        &self.letter_statuses
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn type_word(game: &mut Game, text: &str) {
        for ch in text.chars() {
            game.add_letter(ch).unwrap();
        }
    }

    #[test]
    fn play_scores_and_wins() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Normal);

        type_word(&mut game, "crane");
        assert_eq!(game.pending_guess(), "crane");
        let statuses = game.submit(&corpus).unwrap();
        assert_eq!(
            statuses,
            [
                CellStatus::Gray,
                CellStatus::Green,
                CellStatus::Green,
                CellStatus::Yellow,
                CellStatus::Gray
            ]
        );
        assert_eq!(game.cursor(), (1, 0));
        assert_eq!(game.state(), GameState::Playing);

        type_word(&mut game, "train");
        game.submit(&corpus).unwrap();
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.stats().current_streak, 1);
        assert_eq!(game.stats().guess_distribution[1], 1);
    }

    #[test]
    fn play_rejects_short_and_unknown_guesses() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Normal);

        type_word(&mut game, "cra");
        assert_eq!(game.submit(&corpus), Err(GuessRejection::Incomplete));

        type_word(&mut game, "zz");
        assert!(matches!(game.submit(&corpus), Err(GuessRejection::NotAWord(_))));
        assert_eq!(game.cursor(), (0, 5));
    }

    #[test]
    fn play_row_stops_at_five_letters() {
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Easy);
        type_word(&mut game, "cranes");
        assert_eq!(game.pending_guess(), "crane");

        game.delete_letter();
        assert_eq!(game.pending_guess(), "cran");
    }

    #[test]
    fn six_misses_lose_and_reset_streak() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Easy);

        for _ in 0..ROWS {
            type_word(&mut game, "slope");
            game.submit(&corpus).unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().current_streak, 0);

        // Finished games ignore input
        game.add_letter('a').unwrap();
        assert_eq!(game.cursor(), (ROWS, 0));
    }

    #[test]
    fn hard_mode_enforces_hints() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Hard);

        type_word(&mut game, "crane");
        game.submit(&corpus).unwrap();

        type_word(&mut game, "slope");
        assert_eq!(game.submit(&corpus), Err(GuessRejection::MissingHints));
    }

    #[test]
    fn restart_keeps_statistics() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Normal);
        type_word(&mut game, "train");
        game.submit(&corpus).unwrap();

        game.restart(word("grain"));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.answer().text(), "grain");
        assert_eq!(game.stats().games_won, 1);
        assert!(game.board().is_row_empty(0));
    }

    #[test]
    fn assist_commits_row_gray_and_cycles() {
        let mut game = Game::new(word("train"), Mode::Assist, Difficulty::Normal);
        type_word(&mut game, "crane");

        assert_eq!(game.cursor(), (1, 0));
        assert_eq!(game.board().row_status(0), Some(&[CellStatus::Gray; WORD_LEN]));

        assert!(game.cycle_cell(0, 1));
        assert_eq!(game.board().status(0, 1), CellStatus::Yellow);
        assert!(game.cycle_cell(0, 1));
        assert_eq!(game.board().status(0, 1), CellStatus::Green);
        assert!(game.cycle_cell(0, 1));
        assert_eq!(game.board().status(0, 1), CellStatus::Gray);

        // Uncommitted row
        assert!(!game.cycle_cell(1, 0));
    }

    #[test]
    fn assist_delete_reopens_previous_row() {
        let mut game = Game::new(word("train"), Mode::Assist, Difficulty::Normal);
        type_word(&mut game, "crane");
        game.delete_letter();

        assert_eq!(game.cursor(), (0, 4));
        assert_eq!(game.board().letter(0, 4), None);
        assert_eq!(game.board().status(0, 4), CellStatus::Unguessed);
        assert!(!game.board().is_scannable());
    }

    #[test]
    fn assist_all_green_row_wins() {
        let mut game = Game::new(word("train"), Mode::Assist, Difficulty::Normal);
        type_word(&mut game, "crane");
        for col in 0..WORD_LEN {
            // gray -> yellow -> green
            game.cycle_cell(0, col);
            game.cycle_cell(0, col);
        }
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn assist_recolouring_a_solved_row_resumes_play() {
        let mut game = Game::new(word("train"), Mode::Assist, Difficulty::Normal);
        type_word(&mut game, "crane");
        for col in 0..WORD_LEN {
            game.cycle_cell(0, col);
            game.cycle_cell(0, col);
        }
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.stats().games_played, 0);

        // green -> gray
        assert!(game.cycle_cell(0, 0));
        assert_eq!(game.state(), GameState::Playing);

        game.add_letter('s').unwrap();
        assert_eq!(game.cursor(), (1, 1));
        assert_eq!(game.stats().games_won, 0);
    }

    #[test]
    fn assist_win_is_counted_on_restart() {
        let mut game = Game::new(word("train"), Mode::Assist, Difficulty::Normal);
        type_word(&mut game, "crane");
        for col in 0..WORD_LEN {
            game.cycle_cell(0, col);
            game.cycle_cell(0, col);
        }

        game.restart(word("grain"));
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().guess_distribution[0], 1);

        // An unsolved board is not a win
        type_word(&mut game, "crane");
        game.restart(word("train"));
        assert_eq!(game.stats().games_won, 1);
    }

    #[test]
    fn delete_in_play_mode_stops_at_row_start() {
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Normal);
        type_word(&mut game, "cr");
        game.delete_letter();
        game.delete_letter();
        game.delete_letter();

        assert_eq!(game.cursor(), (0, 0));
        assert!(game.board().is_row_empty(0));
    }

    #[test]
    fn play_mode_cannot_cycle() {
        let corpus = Corpus::embedded().unwrap();
        let mut game = Game::new(word("train"), Mode::Play, Difficulty::Normal);
        type_word(&mut game, "crane");
        game.submit(&corpus).unwrap();
        assert!(!game.cycle_cell(0, 0));
    }

    #[test]
    fn random_answer_comes_from_corpus() {
        let corpus = Corpus::embedded().unwrap();
        let answer = Game::random_answer(&corpus).unwrap();
        assert!(corpus.answers().contains(&answer));
    }
}
