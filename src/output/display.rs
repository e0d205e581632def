//! Display functions for command results

use super::formatters::{candidate_columns, colored_row, create_progress_bar};
use crate::commands::SolveResult;
use crate::solver::Solutions;
use colored::Colorize;

const COLUMNS: usize = 4;

/// Print the best `limit` solutions and the total count
pub fn print_solutions(solutions: &Solutions<'_>, limit: usize) {
    let shown = solutions.top(limit);
    println!(
        "\n{} {}",
        "Possible solutions:".bright_cyan().bold(),
        format!("{} total", solutions.total).bright_yellow()
    );
    if shown.is_empty() {
        println!("  {}", "none".bright_black());
        return;
    }

    for line in candidate_columns(shown, COLUMNS) {
        println!("  {line}");
    }
    if solutions.total > shown.len() {
        println!(
            "  {}",
            format!("… and {} more", solutions.total - shown.len()).bright_black()
        );
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            colored_row(&step.word, &step.statuses)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_before > 0 {
                let kept = step.candidates_after as f64 / step.candidates_before as f64;
                println!(
                    "  Remaining:  [{}] {:.1}%",
                    create_progress_bar(kept, 1.0, 30).green(),
                    kept * 100.0
                );
            }
            if !step.alternatives.is_empty() {
                println!(
                    "  Runners-up: {}",
                    step.alternatives
                        .iter()
                        .map(|w| w.to_uppercase())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}
