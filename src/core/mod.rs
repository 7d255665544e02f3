//! Core domain types for Wordle
//!
//! Words, the letter classifier and its feedback, and the secret answer.

mod answer;
mod feedback;
mod word;

pub use answer::Answer;
pub use feedback::{Feedback, LetterClass, classify};
pub use word::{WORD_LENGTH, Word};
