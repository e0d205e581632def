//! Wordle Finder - CLI
//!
//! Wordle game and assistant with TUI and CLI modes, ranking the words that
//! still fit the board.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_finder::{
    commands::{
        SolveConfig, print_test_all_statistics, run_simple, run_test_all, solve_word, suggest,
    },
    game::{Difficulty, Mode},
    output::{print_solutions, print_solve_result},
    solver::{DISPLAY_WINDOW, RankWeights, Solver},
    wordlists::{Corpus, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_finder",
    about = "Wordle game and assistant that lists and ranks the words matching your feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list to search instead of the built-in one (one word per line)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Letter frequency table (JSON object, letter -> weight)
    #[arg(long, global = true)]
    letter_freqs: Option<PathBuf>,

    /// Word frequency table (JSON object, word -> weight)
    #[arg(long, global = true)]
    word_freqs: Option<PathBuf>,

    /// Weight of the letter-frequency rank
    #[arg(long, global = true, default_value_t = RankWeights::DEFAULT.letter_frequency)]
    letter_weight: f64,

    /// Weight of the word-frequency rank
    #[arg(long, global = true, default_value_t = RankWeights::DEFAULT.word_frequency)]
    word_weight: f64,

    /// Weight of the solution-division rank
    #[arg(long, global = true, default_value_t = RankWeights::DEFAULT.division)]
    division_weight: f64,

    /// Number of solutions to display
    #[arg(short = 'n', long, global = true, default_value_t = DISPLAY_WINDOW)]
    limit: usize,

    /// Difficulty: easy, normal (default) or hard
    #[arg(short, long, global = true, default_value = "normal")]
    difficulty: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random hidden word in the TUI (default)
    Play,

    /// Enter guesses from another game and colour them in the TUI
    Assist,

    /// Rank the solutions for the given rows, e.g. `crane=xggyx`
    Suggest {
        /// Rows as GUESS=FEEDBACK (G green, Y yellow, X/- gray)
        #[arg(required = true)]
        rows: Vec<String>,
    },

    /// Simple CLI assistant (line-based, without TUI)
    Simple,

    /// Solve a specific target word by always playing the top suggestion
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and runners-up
        #[arg(short, long)]
        verbose: bool,
    },

    /// Test the finder on ALL possible answers
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        count: Option<usize>,
    },
}

/// Load the embedded corpus and apply file overrides from the command line
fn load_corpus(cli: &Cli) -> Result<Corpus> {
    let mut corpus = Corpus::embedded().context("Failed to load the built-in word lists")?;

    if let Some(path) = &cli.answers {
        let answers = loader::load_from_file(path)?;
        corpus = corpus.with_answers(answers);
    }
    if let Some(path) = &cli.letter_freqs {
        corpus = corpus.with_letter_frequencies(loader::load_letter_frequencies(path)?);
    }
    if let Some(path) = &cli.word_freqs {
        corpus = corpus.with_word_frequencies(loader::load_word_frequencies(path)?);
    }

    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the TUI screen clean unless RUST_LOG asks otherwise
    let default_level = match cli.command {
        None | Some(Commands::Play | Commands::Assist) => "error",
        Some(_) => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let corpus = load_corpus(&cli)?;
    let weights = RankWeights {
        letter_frequency: cli.letter_weight,
        word_frequency: cli.word_weight,
        division: cli.division_weight,
    };
    let solver = Solver::new(&corpus, weights);
    let difficulty = Difficulty::from_name(&cli.difficulty)
        .with_context(|| format!("Unknown difficulty '{}'", cli.difficulty))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui_command(solver, Mode::Play, difficulty, cli.limit),
        Commands::Assist => run_tui_command(solver, Mode::Assist, difficulty, cli.limit),
        Commands::Suggest { rows } => {
            let solutions = suggest(&rows, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solutions(&solutions, cli.limit);
            Ok(())
        }
        Commands::Simple => run_simple(&solver, cli.limit).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let result =
                solve_word(SolveConfig::new(word), &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::TestAll { count } => {
            run_test_all_command(&solver, count)?;
            Ok(())
        }
    }
}

fn run_test_all_command(solver: &Solver<'_>, count: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Wordle Finder Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible answers",
        solver.corpus().answers().len()
    );
    let weights = solver.weights();
    println!(
        "Weights: letters {}, words {}, division {}\n",
        weights.letter_frequency, weights.word_frequency, weights.division
    );

    let stats = run_test_all(solver, count).map_err(|e| anyhow::anyhow!(e))?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_tui_command(
    solver: Solver<'_>,
    mode: Mode,
    difficulty: Difficulty,
    limit: usize,
) -> Result<()> {
    use wordle_finder::interactive::{App, run_tui};

    let app = App::new(solver, mode, difficulty, limit)?;
    run_tui(app)
}
