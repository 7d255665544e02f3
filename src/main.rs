//! Wordle Frequency Solver - CLI
//!
//! Solve, benchmark, get help with a live game, or play against a random word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_frequency::{
    commands::{
        BenchmarkConfig, PlayOutcome, SolveConfig, run_assist, run_benchmark, run_play,
        solve_word,
    },
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_frequency",
    about = "Wordle solver using positional letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: probing (default) or frequency
    #[arg(short, long, global = true, default_value = "probing")]
    strategy: String,

    /// Wordlist: 'embedded' (default), 'answers' (answers only), or path to a file of guesses
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for picking the secret in play mode
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random word yourself (default)
    Play {
        /// Number of guesses allowed
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Get suggestions for a game you are playing elsewhere
    Assist,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Number of guesses allowed
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Play every answer and report statistics
    Benchmark {
        /// Only test the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Number of guesses allowed per game
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

/// Load the vocabulary based on the -w flag
///
/// - "embedded": embedded guesses and answers
/// - "answers": embedded answers as both guesses and answers
/// - "<path>": guesses from a file, embedded answers (must be a subset)
fn load_vocabulary(wordlist_mode: &str) -> Result<Vocabulary> {
    let embedded = Vocabulary::embedded().context("embedded word lists are inconsistent")?;

    match wordlist_mode {
        "embedded" => Ok(embedded),
        "answers" => Ok(Vocabulary::from_words(embedded.answers().to_vec())),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            Vocabulary::new(words, embedded.answers().to_vec())
                .with_context(|| format!("word list '{path}' is missing answer words"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { max_guesses: 6 });

    match command {
        Commands::Play { max_guesses } => run_play_command(&vocabulary, cli.seed, max_guesses),
        Commands::Assist => {
            let mut strategy = StrategyType::from_name(&cli.strategy, &vocabulary);
            run_assist(&mut strategy, &mut io::stdin().lock(), &mut io::stdout())
        }
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => run_solve_command(&cli.strategy, word, verbose, max_guesses, &vocabulary),
        Commands::Benchmark { limit, max_guesses } => {
            let mut config = BenchmarkConfig::new(cli.strategy);
            config.limit = limit;
            config.max_guesses = max_guesses;

            println!(
                "Running benchmark with the {} strategy...",
                config.strategy
            );
            let result = run_benchmark(&config, &vocabulary);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    strategy_name: &str,
    word: String,
    verbose: bool,
    max_guesses: usize,
    vocabulary: &Vocabulary,
) -> Result<()> {
    let mut strategy = StrategyType::from_name(strategy_name, vocabulary);
    let mut config = SolveConfig::new(word);
    config.max_guesses = max_guesses;

    let result = solve_word(&config, &mut strategy, vocabulary)
        .with_context(|| format!("failed to solve '{}'", config.target))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(vocabulary: &Vocabulary, seed: Option<u64>, max_guesses: usize) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outcome = run_play(
        vocabulary,
        &mut rng,
        max_guesses,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    if outcome == PlayOutcome::Quit {
        println!("\n👋 Thanks for playing!\n");
    }
    Ok(())
}
