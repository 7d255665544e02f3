//! Word lists for Wordle solving
//!
//! The `Vocabulary` pairs the ordered list of legal guesses with the ordered
//! subset of words that can be the secret. It is read-only once built and can
//! be shared by reference between any number of games.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::{WORD_LENGTH, Word};
use crate::error::WordleError;
use log::info;
use rustc_hash::FxHashSet;

/// Legal guesses plus the answer subset
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    answers: Vec<Word>,
    legal: FxHashSet<Word>,
}

impl Vocabulary {
    /// Create a vocabulary from guess words and answer words
    ///
    /// Both lists keep their order; answer order decides guess tie-breaks.
    ///
    /// # Errors
    /// Returns `InconsistentConstruction` naming the first answer that is not a legal guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::wordlists::{Vocabulary, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["abcde", "edcba", "aaaaa"]);
    /// let answers = words_from_slice(&["abcde", "edcba"]);
    /// assert!(Vocabulary::new(words.clone(), answers).is_ok());
    ///
    /// let stray = words_from_slice(&["zzzzz"]);
    /// assert!(Vocabulary::new(words, stray).is_err());
    /// ```
    pub fn new(words: Vec<Word>, answers: Vec<Word>) -> Result<Self, WordleError> {
        let legal: FxHashSet<Word> = words.iter().cloned().collect();

        if let Some(missing) = answers.iter().find(|a| !legal.contains(*a)) {
            return Err(WordleError::InconsistentConstruction {
                missing: missing.text().to_string(),
            });
        }

        info!(
            "vocabulary ready: {} guesses, {} answers",
            words.len(),
            answers.len()
        );

        Ok(Self {
            words,
            answers,
            legal,
        })
    }

    /// Use the same words as both guesses and answers
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let legal = words.iter().cloned().collect();
        Self {
            answers: words.clone(),
            words,
            legal,
        }
    }

    /// The vocabulary compiled into the binary
    ///
    /// # Errors
    /// Returns `InconsistentConstruction` if the embedded lists disagree.
    pub fn embedded() -> Result<Self, WordleError> {
        Self::new(loader::words_from_slice(ALLOWED), loader::words_from_slice(ANSWERS))
    }

    /// All legal guesses, in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words that can be the secret, in order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Check whether `word` may be guessed
    #[inline]
    #[must_use]
    pub fn is_legal_guess(&self, word: &Word) -> bool {
        self.legal.contains(word)
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        WORD_LENGTH
    }
}
