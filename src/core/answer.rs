//! The secret word of a game

use super::{Feedback, Word};
use crate::error::WordleError;
use crate::wordlists::Vocabulary;
use rand::Rng;
use rand::seq::IndexedRandom;

/// The secret a game is played against
///
/// Guesses are checked against the vocabulary before they are classified.
#[derive(Debug, Clone)]
pub struct Answer<'a> {
    word: Word,
    vocabulary: &'a Vocabulary,
}

impl<'a> Answer<'a> {
    /// Use a specific secret word
    ///
    /// The word does not have to be in the answer list. A secret outside the
    /// answer list will eventually make a strategy report `NoCandidates`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `word` is not a valid word.
    pub fn new(word: &str, vocabulary: &'a Vocabulary) -> Result<Self, WordleError> {
        Ok(Self {
            word: Word::new(word)?,
            vocabulary,
        })
    }

    /// Pick a secret from the answer list using the given random source
    ///
    /// Pass a seeded generator for repeatable games.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the answer list is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_frequency::core::Answer;
    /// use wordle_frequency::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded().unwrap();
    /// let a = Answer::random(&vocabulary, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = Answer::random(&vocabulary, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a.word(), b.word());
    /// ```
    pub fn random<R: Rng + ?Sized>(
        vocabulary: &'a Vocabulary,
        rng: &mut R,
    ) -> Result<Self, WordleError> {
        let word = vocabulary
            .answers()
            .choose(rng)
            .ok_or_else(|| WordleError::InvalidInput("answer list is empty".to_string()))?;

        Ok(Self {
            word: word.clone(),
            vocabulary,
        })
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Classify a guess against the secret
    ///
    /// # Errors
    /// Returns `InvalidInput` if the guess is malformed or not a legal guess.
    pub fn make_guess(&self, guess: &str) -> Result<Feedback, WordleError> {
        let guess = Word::new(guess)?;
        if !self.vocabulary.is_legal_guess(&guess) {
            return Err(WordleError::InvalidInput(format!(
                "the word '{guess}' is not a legal guess"
            )));
        }
        Ok(Feedback::calculate(&guess, &self.word))
    }
}
