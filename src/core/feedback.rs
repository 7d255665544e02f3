//! Feedback generation for a guess against a secret
//!
//! Classification is two-pass so repeated letters are credited at most as many
//! times as they occur in the secret:
//! 1. Exact matches are marked `Correct` and removed from the pool of unclaimed secret letters
//! 2. Remaining positions are marked `Present` while the pool still holds that letter
//! 3. Everything else is `Absent`

use super::word::{WORD_LENGTH, Word};
use crate::error::WordleError;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Letter is in the secret at this exact position (green)
    Correct,
    /// Letter is in the secret, but not at this position (yellow)
    Present,
    /// Letter has no unclaimed occurrence left in the secret (gray)
    Absent,
}

impl LetterClass {
    /// Whether this letter counts as a match (green or yellow)
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Emoji square for this class
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The guessed word together with the classification of each of its letters
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    word: Word,
    classes: [LetterClass; WORD_LENGTH],
}

impl Feedback {
    /// Build feedback from a word and explicit classes
    ///
    /// Used when the feedback comes from outside (a user typing colors), where
    /// it is not regenerated from a known secret.
    #[must_use]
    pub const fn new(word: Word, classes: [LetterClass; WORD_LENGTH]) -> Self {
        Self { word, classes }
    }

    /// Classify `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::{Feedback, LetterClass::*, Word};
    ///
    /// let guess = Word::new("mamma").unwrap();
    /// let secret = Word::new("llama").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.classes(), &[Absent, Present, Absent, Correct, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self {
            word: guess.clone(),
            classes: classify_letters(guess, secret),
        }
    }

    /// Parse feedback typed as a pattern string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `InvalidInput` if the pattern is not 5 valid symbols.
    pub fn from_pattern(word: Word, pattern: &str) -> Result<Self, WordleError> {
        let parsed: Vec<LetterClass> = pattern
            .chars()
            .map(LetterClass::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| WordleError::InvalidInput(format!("invalid pattern: {pattern}")))?;

        let classes: [LetterClass; WORD_LENGTH] = parsed.try_into().map_err(|_| {
            WordleError::InvalidInput(format!("pattern must have {WORD_LENGTH} symbols: {pattern}"))
        })?;

        Ok(Self { word, classes })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-position classification
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.classes
    }

    /// Iterate over (letter, class) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterClass)> + '_ {
        self.word.chars().iter().copied().zip(self.classes)
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.classes.iter().all(|&c| c == LetterClass::Correct)
    }

    /// Number of positions classified `Correct` or `Present`
    #[must_use]
    pub fn count_matches(&self) -> usize {
        self.classes.iter().filter(|c| c.is_match()).count()
    }

    /// Whether `candidate` as the secret would reproduce this feedback exactly
    #[inline]
    #[must_use]
    pub fn is_consistent_with(&self, candidate: &Word) -> bool {
        classify_letters(&self.word, candidate) == self.classes
    }

    /// Emoji squares for the classes, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classes.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.to_emoji())
    }
}

/// Classify two raw strings
///
/// Vocabulary membership is not checked here; `Answer::make_guess` does that
/// when a vocabulary is at hand.
///
/// # Errors
/// Returns `InvalidInput` if the lengths differ or either string is not a valid word.
///
/// # Examples
/// ```
/// use wordle_frequency::core::classify;
///
/// assert!(classify("crane", "crane").unwrap().is_perfect());
/// assert!(classify("crane", "cranes").is_err());
/// ```
pub fn classify(guess: &str, secret: &str) -> Result<Feedback, WordleError> {
    if guess.len() != secret.len() {
        return Err(WordleError::InvalidInput(format!(
            "guess '{guess}' and secret '{secret}' must have the same number of letters"
        )));
    }
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Feedback::calculate(&guess, &secret))
}

fn classify_letters(guess: &Word, secret: &Word) -> [LetterClass; WORD_LENGTH] {
    let mut result = [None; WORD_LENGTH];
    let mut unclaimed = secret.char_counts();

    // First pass: exact position matches claim their letter
    for (slot, (&g, &s)) in result.iter_mut().zip(guess.chars().iter().zip(secret.chars())) {
        if g == s {
            *slot = Some(LetterClass::Correct);
            if let Some(count) = unclaimed.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced letters claim from what is left
    for (slot, &g) in result.iter_mut().zip(guess.chars()) {
        if slot.is_none()
            && let Some(count) = unclaimed.get_mut(&g)
            && *count > 0
        {
            *slot = Some(LetterClass::Present);
            *count -= 1;
        }
    }

    result.map(|slot| slot.unwrap_or(LetterClass::Absent))
}

#[cfg(test)]
mod tests {
    use super::LetterClass::{Absent, Correct, Present};
    use super::*;
    use crate::wordlists::ANSWERS;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        classify(guess, secret).unwrap()
    }

    #[test]
    fn all_absent() {
        assert_eq!(feedback("abcde", "fghij").classes(), &[Absent; 5]);
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "llama"] {
            let fb = feedback(word, word);
            assert!(fb.is_perfect());
            assert_eq!(fb.count_matches(), 5);
        }
    }

    #[test]
    fn golden_repeated_letters_llama() {
        // Exact matches claim the a at 4 and the m at 3, leaving l, l, a in the pool
        assert_eq!(
            feedback("mamma", "llama").classes(),
            &[Absent, Present, Absent, Correct, Correct]
        );
    }

    #[test]
    fn repeated_guess_letters_all_present() {
        // ERASE has two e's, so both e's in SPEED are credited
        assert_eq!(
            feedback("speed", "erase").classes(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // The o at 3 is exact, the o at 1 claims FLOOR's other o
        assert_eq!(
            feedback("robot", "floor").classes(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn single_secret_letter_credited_once() {
        // One e in the secret: only the first unmatched guess e gets yellow
        assert_eq!(
            feedback("geese", "those").classes(),
            &[Absent, Absent, Absent, Correct, Correct]
        );
        assert_eq!(
            feedback("eerie", "crane").classes(),
            &[Absent, Absent, Present, Absent, Correct]
        );
        assert_eq!(
            feedback("eevee", "sweat").classes(),
            &[Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn real_wordle_example() {
        assert_eq!(
            feedback("crane", "slate").classes(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn classify_rejects_mismatched_lengths() {
        assert!(matches!(
            classify("crane", "cranes"),
            Err(WordleError::InvalidInput(_))
        ));
        assert!(matches!(
            classify("abcd", "abcd"),
            Err(WordleError::InvalidInput(_))
        ));
    }

    #[test]
    fn matches_never_exceed_secret_letter_counts() {
        let words: Vec<Word> = ANSWERS[..80].iter().map(|w| Word::new(*w).unwrap()).collect();

        for guess in &words {
            for secret in &words {
                let fb = Feedback::calculate(guess, secret);

                let positional_equal = (0..WORD_LENGTH)
                    .filter(|&i| guess.char_at(i) == secret.char_at(i))
                    .count();
                let correct = fb.classes().iter().filter(|&&c| c == Correct).count();
                assert_eq!(correct, positional_equal, "{guess} vs {secret}");

                for (letter, _) in fb.iter() {
                    let credited = fb
                        .iter()
                        .filter(|&(l, c)| l == letter && c.is_match())
                        .count();
                    let in_secret = secret.chars().iter().filter(|&&l| l == letter).count();
                    assert!(credited <= in_secret, "{guess} vs {secret}");
                }
            }
        }
    }

    #[test]
    fn feedback_is_consistent_with_its_own_secret() {
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("irate").unwrap();
        let fb = Feedback::calculate(&guess, &secret);

        assert!(fb.is_consistent_with(&secret));
        assert!(!fb.is_consistent_with(&Word::new("slate").unwrap()));
    }

    #[test]
    fn count_matches_counts_green_and_yellow() {
        let fb = feedback("robot", "floor");
        assert_eq!(fb.count_matches(), 3);
    }

    #[test]
    fn from_pattern_valid() {
        let word = Word::new("crane").unwrap();
        let a = Feedback::from_pattern(word.clone(), "GY-G_").unwrap();
        let b = Feedback::from_pattern(word, "🟩🟨⬜🟩⬜").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.classes(), &[Correct, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn from_pattern_invalid() {
        let word = Word::new("crane").unwrap();
        assert!(Feedback::from_pattern(word.clone(), "GYG").is_err());
        assert!(Feedback::from_pattern(word.clone(), "GYGGYG").is_err());
        assert!(Feedback::from_pattern(word.clone(), "GXGGY").is_err());
        assert!(Feedback::from_pattern(word, "").is_err());
    }

    #[test]
    fn display_shows_word_and_emoji() {
        let fb = feedback("crane", "slate");
        assert_eq!(fb.to_string(), "crane ⬜⬜🟩⬜🟩");
    }
}
