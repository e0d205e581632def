//! Command implementations

pub mod simple;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{board_from_rows, parse_row_entry, suggest};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
