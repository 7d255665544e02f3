//! Wordle Frequency Solver
//!
//! Narrows the answer list turn by turn and picks each guess by positional
//! letter frequency, probing untested letters when the opening guess says little.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_frequency::core::Answer;
//! use wordle_frequency::solver::{ProbingStrategy, Strategy};
//! use wordle_frequency::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded().unwrap();
//! let answer = Answer::new("robot", &vocabulary).unwrap();
//! let mut strategy = ProbingStrategy::new(&vocabulary);
//!
//! let mut feedback = None;
//! loop {
//!     let guess = strategy.make_guess(feedback.as_ref()).unwrap();
//!     let result = answer.make_guess(guess.text()).unwrap();
//!     if result.is_perfect() {
//!         break;
//!     }
//!     feedback = Some(result);
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Candidate narrowing and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
