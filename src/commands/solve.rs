//! Word solving command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{Answer, Feedback};
use crate::error::WordleError;
use crate::solver::Strategy;
use crate::wordlists::Vocabulary;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word with the given strategy
///
/// The strategy is reset first, so it can be reused across calls.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 ASCII letters)
/// - The strategy runs out of candidates (target not in the answer list)
pub fn solve_word<'a, S: Strategy<'a>>(
    config: &SolveConfig,
    strategy: &mut S,
    vocabulary: &'a Vocabulary,
) -> Result<SolveResult, WordleError> {
    let answer = Answer::new(&config.target, vocabulary)?;
    strategy.reset();

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = strategy.remaining();
        let previous = guesses.last().map(|step| &step.feedback);
        let guess = strategy.make_guess(previous)?;

        let feedback = answer.make_guess(guess.text())?;
        let solved = feedback.is_perfect();

        guesses.push(GuessStep {
            feedback,
            candidates_before,
            candidates_after: strategy.remaining(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: answer.word().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: answer.word().to_string(),
    })
}
