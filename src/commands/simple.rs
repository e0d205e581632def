//! Simple interactive CLI mode
//!
//! Line-based assistant without TUI: enter each guess with its feedback and
//! get the ranked candidates back.

use super::suggest::{board_from_rows, parse_row_entry};
use crate::core::{ROWS, RowStatus, Word, is_solved, row_to_emoji};
use crate::output::print_solutions;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver<'_>, limit: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Finder - Assistant Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the word and its feedback, e.g. 'crane xggyx':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use X/-/⬜ for gray (not in word)\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last row\n");

    let mut rows: Vec<(Word, RowStatus)> = Vec::new();

    loop {
        let board = board_from_rows(&rows)?;
        let solutions = solver.solutions(&board);

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {}: {} candidates remaining", rows.len() + 1, solutions.total);
        println!("────────────────────────────────────────────────────────────");
        print_solutions(&solutions, limit);

        if solutions.is_empty() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        }

        let input = get_user_input("Guess and feedback (or command)")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                rows.clear();
                println!("\n🔄 New game started!\n");
            }
            "undo" | "u" => {
                if rows.pop().is_some() {
                    println!("✓ Undone! Back to turn {}\n", rows.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            _ => match parse_row_entry(&input) {
                Ok(entry) => {
                    if rows.len() == ROWS {
                        println!("❌ The board is full. Type 'undo' or 'new'.\n");
                        continue;
                    }
                    rows.push(entry);
                    if let Some((word, statuses)) = rows.last()
                        && is_solved(statuses)
                    {
                        print_solved(word, &rows);
                        rows.clear();
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

fn print_solved(word: &Word, rows: &[(Word, RowStatus)]) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        format!(
            "    🎉  Solved: {} in {} {}!",
            word.text().to_uppercase(),
            rows.len(),
            if rows.len() == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    );
    for (i, (guess, statuses)) in rows.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().to_uppercase().bright_white().bold(),
            row_to_emoji(statuses)
        );
    }
    println!("{}", "═".repeat(70).bright_cyan());
    println!("\n🔄 New game started!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
