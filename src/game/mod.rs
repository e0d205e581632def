//! Game state around the finder: playing against a hidden answer or
//! assisting with a game played elsewhere

mod difficulty;
mod keyboard;
mod state;
mod stats;

pub use difficulty::{Difficulty, GuessRejection, Hints, validate_guess};
pub use keyboard::LetterStatuses;
pub use state::{Game, GameState, Mode};
pub use stats::Statistics;
