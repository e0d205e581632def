//! Wordle Finder
//!
//! Filters a Wordle dictionary down to the words consistent with the feedback
//! on a board and ranks them by letter frequency, word frequency and how well
//! their letters split the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_finder::core::Board;
//! use wordle_finder::solver::{RankWeights, Solver};
//! use wordle_finder::wordlists::Corpus;
//!
//! let corpus = Corpus::embedded().unwrap();
//! let solver = Solver::new(&corpus, RankWeights::default());
//!
//! // CRANE scored gray, green, green, yellow, gray
//! let board = Board::from_rows(&[("crane", "XGGYX")]).unwrap();
//! let solutions = solver.solutions(&board);
//!
//! for word in solutions.top(20) {
//!     println!("{word}");
//! }
//! println!("{} possible solutions", solutions.total);
//! ```

// Core domain types
pub mod core;

// Constraint extraction, filtering and ranking
pub mod solver;

// Word lists and frequency tables
pub mod wordlists;

// Game state, difficulty and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
