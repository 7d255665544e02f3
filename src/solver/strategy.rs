//! Turn-by-turn guessing strategies
//!
//! Defines the Strategy trait and concrete implementations. Each strategy owns
//! its candidate set, so games never share mutable state; only the vocabulary
//! is borrowed.

use super::CandidateSet;
use crate::core::{Feedback, Word};
use crate::error::WordleError;
use crate::wordlists::Vocabulary;
use log::debug;

/// A first guess with fewer matches than this triggers the letter-probing second guess
pub const PROBE_THRESHOLD: usize = 2;

/// A strategy that plays one game at a time
pub trait Strategy<'a> {
    /// Produce the next guess
    ///
    /// Pass `None` for the opening guess, then the feedback for the previous guess.
    ///
    /// # Errors
    /// Returns `NoCandidates` if no answer is consistent with the feedback.
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<&'a Word, WordleError>;

    /// Forget all feedback and start a new game
    fn reset(&mut self);

    /// Number of guesses made so far
    fn turn(&self) -> usize;

    /// Number of candidates still consistent with the feedback
    fn remaining(&self) -> usize;
}

/// Where a `ProbingStrategy` is in its game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyState {
    /// No guesses made
    Fresh,
    /// One guess made; the next feedback decides between best and probing guess
    AwaitingDecision,
    /// Two or more guesses made; always best guess
    Converging,
}

/// Positional-frequency strategy with a letter-probing second guess
///
/// If the opening guess yields fewer than [`PROBE_THRESHOLD`] greens and
/// yellows, the second guess is the best-scoring answer that avoids every
/// letter of the opening guess, picked before the feedback is applied.
/// Every other turn eliminates first and plays the best-scoring candidate.
#[derive(Debug, Clone)]
pub struct ProbingStrategy<'a> {
    candidates: CandidateSet<'a>,
    turn: usize,
}

impl<'a> ProbingStrategy<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            candidates: CandidateSet::new(vocabulary),
            turn: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> StrategyState {
        match self.turn {
            0 => StrategyState::Fresh,
            1 => StrategyState::AwaitingDecision,
            _ => StrategyState::Converging,
        }
    }
}

impl<'a> Strategy<'a> for ProbingStrategy<'a> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<&'a Word, WordleError> {
        let guess = match feedback {
            None => self.candidates.find_best_guess(),
            Some(feedback)
                if self.state() == StrategyState::AwaitingDecision
                    && self.candidates.number_of_matches(feedback) < PROBE_THRESHOLD =>
            {
                let probe = self.candidates.find_second_best_guess(feedback);
                self.candidates.eliminate_words(feedback);
                debug!("weak opening {feedback}, probing with {probe:?}");
                probe.or_else(|| self.candidates.find_best_guess())
            }
            Some(feedback) => {
                self.candidates.eliminate_words(feedback);
                self.candidates.find_best_guess()
            }
        };

        if self.candidates.is_empty() {
            return Err(WordleError::NoCandidates);
        }
        let guess = guess.ok_or(WordleError::NoCandidates)?;

        self.turn += 1;
        debug!(
            "turn {}: guessing {guess} ({} candidates)",
            self.turn,
            self.candidates.size()
        );
        Ok(guess)
    }

    fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.candidates.vocabulary());
        self.turn = 0;
    }

    fn turn(&self) -> usize {
        self.turn
    }

    fn remaining(&self) -> usize {
        self.candidates.size()
    }
}

/// Plain positional-frequency strategy
///
/// Eliminates with every feedback and plays the best-scoring candidate.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy<'a> {
    candidates: CandidateSet<'a>,
    turn: usize,
}

impl<'a> FrequencyStrategy<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            candidates: CandidateSet::new(vocabulary),
            turn: 0,
        }
    }
}

impl<'a> Strategy<'a> for FrequencyStrategy<'a> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<&'a Word, WordleError> {
        if let Some(feedback) = feedback {
            self.candidates.eliminate_words(feedback);
        }
        let guess = self
            .candidates
            .find_best_guess()
            .ok_or(WordleError::NoCandidates)?;

        self.turn += 1;
        Ok(guess)
    }

    fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.candidates.vocabulary());
        self.turn = 0;
    }

    fn turn(&self) -> usize {
        self.turn
    }

    fn remaining(&self) -> usize {
        self.candidates.size()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType<'a> {
    /// Frequency scoring with a letter-probing second guess (default)
    Probing(ProbingStrategy<'a>),
    /// Frequency scoring only
    Frequency(FrequencyStrategy<'a>),
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "probing", "frequency".
    /// Defaults to probing if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, vocabulary: &'a Vocabulary) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyStrategy::new(vocabulary)),
            _ => Self::Probing(ProbingStrategy::new(vocabulary)),
        }
    }
}

impl<'a> Strategy<'a> for StrategyType<'a> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<&'a Word, WordleError> {
        match self {
            Self::Probing(s) => s.make_guess(feedback),
            Self::Frequency(s) => s.make_guess(feedback),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Probing(s) => s.reset(),
            Self::Frequency(s) => s.reset(),
        }
    }

    fn turn(&self) -> usize {
        match self {
            Self::Probing(s) => s.turn(),
            Self::Frequency(s) => s.turn(),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::Probing(s) => s.remaining(),
            Self::Frequency(s) => s.remaining(),
        }
    }
}
