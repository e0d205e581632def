//! Wordle finding pipeline
//!
//! Board feedback flows through constraint extraction, candidate filtering
//! and ranking.

mod cache;
mod constraints;
mod engine;
mod matcher;
pub mod ranking;

pub use cache::SolutionCache;
pub use constraints::{ConstraintSet, GreenConflict};
pub use engine::{DISPLAY_WINDOW, Solutions, Solver};
pub use matcher::{CandidateFilter, filter_candidates};
pub use ranking::{RankWeights, rank};
