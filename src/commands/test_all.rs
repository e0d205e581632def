//! Test all answers - comprehensive finder evaluation
//!
//! Plays the top-ranked suggestion against every answer word in parallel and
//! reports how many guesses each game took.

use crate::core::{Board, ROWS, Word, score_guess};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

impl WordTestResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening_word: Option<String>,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Play one game against `target`, always guessing the best candidate
#[must_use]
pub fn play_out(solver: &Solver<'_>, target: &Word) -> WordTestResult {
    let mut board = Board::new();
    let mut guesses = Vec::new();
    let mut success = false;

    for row in 0..ROWS {
        let Some(guess) = solver.next_guess(&board) else {
            break;
        };
        guesses.push(guess.text().to_string());

        if guess == target {
            success = true;
            break;
        }

        if board
            .fill_row(row, guess.text(), score_guess(guess, target))
            .is_err()
        {
            break;
        }
    }

    WordTestResult {
        word: target.text().to_string(),
        guesses,
        success,
    }
}

/// Run the finder on all answer words (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if the progress bar template is rejected.
pub fn run_test_all(solver: &Solver<'_>, limit: Option<usize>) -> Result<TestAllStatistics, String> {
    let answers = solver.corpus().answers();
    let test_words = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let results: Vec<WordTestResult> = test_words
        .par_iter()
        .map(|target| {
            let result = play_out(solver, target);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let stats = summarize(&results, total_start.elapsed());
    log::debug!(
        "Solved {}/{} words in {:.2}s",
        stats.solved,
        stats.total_words,
        stats.total_time.as_secs_f64()
    );
    Ok(stats)
}

/// Aggregate per-word results
#[must_use]
pub fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses() >= 5)
        .map(|r| (r.word.clone(), r.num_guesses()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses()).min().unwrap_or(0),
        opening_word: results.first().and_then(|r| r.guesses.first().cloned()),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Range:               {}-{} guesses",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );
    if let Some(opening) = &stats.opening_word {
        println!("  Opening word:        {}", opening.to_uppercase().bright_white());
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=ROWS {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
