//! Error types shared by the library
//!
//! Every failure here is a caller-input or caller-protocol violation; none are transient.

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Errors surfaced by classification, vocabulary construction and guessing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    /// Mismatched word lengths, a malformed word, or a guess outside the vocabulary
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The answer list is not a subset of the guess list
    #[error("answer '{missing}' is not in the list of legal guesses")]
    InconsistentConstruction { missing: String },

    /// Elimination emptied the candidate set
    #[error("no candidate words are consistent with the feedback received")]
    NoCandidates,
}

impl From<WordError> for WordleError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
