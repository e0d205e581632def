//! TUI application state and logic

use crate::core::{ROWS, WORD_LEN, Word};
use crate::game::{Difficulty, Game, GameState, Mode};
use crate::solver::{SolutionCache, Solutions, Solver};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub game: Game,
    pub cache: SolutionCache<'a>,
    pub limit: usize,
    /// Cell highlighted for colour cycling (assist mode)
    pub selected: (usize, usize),
    pub show_solutions: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus has no answers to pick from.
    pub fn new(solver: Solver<'a>, mode: Mode, difficulty: Difficulty, limit: usize) -> Result<Self> {
        let answer = Game::random_answer(solver.corpus())
            .ok_or_else(|| anyhow!("The answer list is empty"))?;

        let mut app = Self {
            solver,
            game: Game::new(answer, mode, difficulty),
            cache: SolutionCache::new(),
            limit,
            selected: (0, 0),
            show_solutions: mode == Mode::Assist,
            messages: Vec::new(),
            should_quit: false,
        };

        match mode {
            Mode::Play => {
                app.add_message("Welcome! Guess the hidden word.", MessageStyle::Info);
                app.add_message(difficulty.instructions(), MessageStyle::Info);
            }
            Mode::Assist => {
                app.add_message(
                    "Type the guesses you made; move with arrows and press Space to set colours.",
                    MessageStyle::Info,
                );
            }
        }
        app.refresh_solutions();
        Ok(app)
    }

    /// Recompute solutions if the board changed
    pub fn refresh_solutions(&mut self) {
        let _ = self.cache.get(&self.solver, self.game.board());
    }

    #[must_use]
    pub const fn solutions(&self) -> &Solutions<'a> {
        self.cache.solutions()
    }

    pub fn type_letter(&mut self, ch: char) {
        if let Err(e) = self.game.add_letter(ch) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn delete_letter(&mut self) {
        self.game.delete_letter();
    }

    /// Enter: score the row in play mode, or start over once the game ended
    pub fn submit(&mut self) {
        if self.game.state() != GameState::Playing {
            self.new_game();
            return;
        }
        if self.game.mode() == Mode::Assist {
            return;
        }

        match self.game.submit(self.solver.corpus()) {
            Ok(_) => match self.game.state() {
                GameState::Won => {
                    let guesses = self.game.cursor().0;
                    let celebration = match guesses {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it in six! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
                }
                GameState::Lost => {
                    let answer = self.game.answer().text().to_uppercase();
                    self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
                    self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
                }
                GameState::Playing => {}
            },
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    /// Cycle the colour of the selected cell (assist mode)
    pub fn cycle_selected(&mut self) {
        let (row, col) = self.selected;
        if !self.game.cycle_cell(row, col) {
            self.add_message("Only finished rows can be coloured", MessageStyle::Error);
        } else if self.game.state() == GameState::Won {
            self.add_message("🎉 Solved! Press Ctrl-N to start over.", MessageStyle::Success);
        }
    }

    pub fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = self.selected;
        let row = row.saturating_add_signed(d_row).min(ROWS - 1);
        let col = col.saturating_add_signed(d_col).min(WORD_LEN - 1);
        self.selected = (row, col);
    }

    pub fn cycle_difficulty(&mut self) {
        let next = match self.game.difficulty() {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
        self.game.set_difficulty(next);
        self.add_message(
            &format!("Difficulty: {next} ({})", next.instructions()),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        let answer = Game::random_answer(self.solver.corpus())
            .unwrap_or_else(|| self.game.answer().clone());
        self.game.restart(answer);
        self.selected = (0, 0);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('d') if ctrl => self.cycle_difficulty(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_solutions = !self.show_solutions,
            KeyCode::Char(' ') => self.cycle_selected(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.move_selection(-1, 0),
            KeyCode::Down => self.move_selection(1, 0),
            KeyCode::Left => self.move_selection(0, -1),
            KeyCode::Right => self.move_selection(0, 1),
            _ => {}
        }
        self.refresh_solutions();
    }

    /// The word the player is looking for, revealed once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        (self.game.mode() == Mode::Play && self.game.state() != GameState::Playing)
            .then(|| self.game.answer())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
