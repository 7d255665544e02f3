//! Benchmark command
//!
//! Plays every answer (or the first `limit` answers) as a separate game.
//! Games run in parallel; each one owns its strategy and borrows the shared vocabulary.

use super::solve::{SolveConfig, solve_word};
use crate::solver::StrategyType;
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub strategy: String,
    pub limit: Option<usize>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            limit: None,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

/// How a single game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Solved in this many guesses
    Solved(usize),
    /// Guess limit reached
    Unsolved,
    /// The strategy reported an error
    Failed(String),
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub hardest_words: Vec<(String, usize)>,
    pub unsolved_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the benchmark over the vocabulary's answers
pub fn run_benchmark(config: &BenchmarkConfig, vocabulary: &Vocabulary) -> BenchmarkResult {
    let start = Instant::now();
    let targets: Vec<&str> = vocabulary
        .answers()
        .iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|w| w.text())
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(&str, GameOutcome)> = targets
        .par_iter()
        .map(|&target| {
            let outcome = play_game(config, vocabulary, target);
            pb.inc(1);
            (target, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&outcomes, start.elapsed())
}

fn play_game(config: &BenchmarkConfig, vocabulary: &Vocabulary, target: &str) -> GameOutcome {
    let mut strategy = StrategyType::from_name(&config.strategy, vocabulary);
    let solve_config = SolveConfig {
        target: target.to_string(),
        max_guesses: config.max_guesses,
    };

    match solve_word(&solve_config, &mut strategy, vocabulary) {
        Ok(result) if result.success => GameOutcome::Solved(result.guesses.len()),
        Ok(_) => GameOutcome::Unsolved,
        Err(e) => {
            warn!("game for '{target}' failed: {e}");
            GameOutcome::Failed(e.to_string())
        }
    }
}

fn summarize(outcomes: &[(&str, GameOutcome)], duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved_words: Vec<(String, usize)> = Vec::new();
    let mut unsolved_words = Vec::new();

    for (word, outcome) in outcomes {
        match outcome {
            GameOutcome::Solved(n) => {
                *distribution.entry(*n).or_insert(0) += 1;
                solved_words.push(((*word).to_string(), *n));
            }
            GameOutcome::Unsolved | GameOutcome::Failed(_) => {
                unsolved_words.push((*word).to_string());
            }
        }
    }

    let solved = solved_words.len();
    let total_guesses: usize = solved_words.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_words = solved_words.clone();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    BenchmarkResult {
        total_words: outcomes.len(),
        solved,
        total_guesses,
        average_guesses,
        min_guesses: solved_words.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: solved_words.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest_words,
        unsolved_words,
        duration,
        words_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
