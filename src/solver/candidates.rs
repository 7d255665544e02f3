//! Candidate narrowing and positional-frequency guess scoring

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::Vocabulary;
use log::debug;
use rustc_hash::FxHashMap;

/// The answers still consistent with every piece of feedback seen so far
///
/// Starts as the full answer list of the vocabulary and only ever shrinks.
/// Candidates keep the answer-list order, which decides ties when scoring.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    vocabulary: &'a Vocabulary,
    candidates: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Start a fresh candidate set holding every answer
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            candidates: vocabulary.answers().iter().collect(),
        }
    }

    /// The vocabulary this set was built from
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Remaining candidates, in answer-list order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    ///
    /// Zero means no known word fits the feedback: either the secret is not in
    /// the answer list or the feedback was wrong.
    #[must_use]
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Keep only candidates that, as the secret, would reproduce `feedback` exactly
    pub fn eliminate_words(&mut self, feedback: &Feedback) {
        let before = self.candidates.len();
        self.candidates.retain(|&candidate| feedback.is_consistent_with(candidate));
        debug!(
            "eliminated with {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );
    }

    /// Remove a single word; returns whether it was a candidate
    pub fn remove(&mut self, word: &str) -> bool {
        match self.candidates.iter().position(|w| w.text() == word) {
            Some(index) => {
                self.candidates.remove(index);
                true
            }
            None => false,
        }
    }

    /// How many candidates have each letter at `index`
    ///
    /// # Panics
    /// Panics if `index >= WORD_LENGTH`
    #[must_use]
    pub fn index_frequency(&self, index: usize) -> FxHashMap<u8, usize> {
        let mut frequency = FxHashMap::default();
        for word in &self.candidates {
            *frequency.entry(word.char_at(index)).or_insert(0) += 1;
        }
        frequency
    }

    /// The candidate with the highest positional letter frequency score
    ///
    /// Ties go to the earliest candidate in answer-list order.
    /// Returns `None` when no candidates remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::solver::CandidateSet;
    /// use wordle_frequency::wordlists::{Vocabulary, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["crane", "crate", "grate", "irate", "slate"]);
    /// let vocabulary = Vocabulary::from_words(words);
    /// let candidates = CandidateSet::new(&vocabulary);
    ///
    /// assert_eq!(candidates.find_best_guess().unwrap().text(), "crate");
    /// ```
    #[must_use]
    pub fn find_best_guess(&self) -> Option<&'a Word> {
        self.best_scoring(|_| true)
    }

    /// Like `find_best_guess`, but only among candidates that share no letter
    /// with the word guessed in `feedback`, whatever those letters scored
    ///
    /// Probes untested letters after an uninformative first guess. Returns
    /// `None` when no candidate avoids every guessed letter.
    #[must_use]
    pub fn find_second_best_guess(&self, feedback: &Feedback) -> Option<&'a Word> {
        let used = feedback.word();
        self.best_scoring(|word| !word.shares_letter_with(used))
    }

    /// Green plus yellow count of `feedback`
    #[must_use]
    pub fn number_of_matches(&self, feedback: &Feedback) -> usize {
        feedback.count_matches()
    }

    fn index_frequencies(&self) -> [FxHashMap<u8, usize>; WORD_LENGTH] {
        std::array::from_fn(|i| self.index_frequency(i))
    }

    fn best_scoring(&self, eligible: impl Fn(&Word) -> bool) -> Option<&'a Word> {
        let frequencies = self.index_frequencies();
        let mut best: Option<(&'a Word, usize)> = None;

        for &word in &self.candidates {
            if !eligible(word) {
                continue;
            }
            let score = score(word, &frequencies);
            // Strictly greater: the first of equal scores stays
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }

        best.map(|(word, _)| word)
    }
}

fn score(word: &Word, frequencies: &[FxHashMap<u8, usize>; WORD_LENGTH]) -> usize {
    word.chars()
        .iter()
        .zip(frequencies)
        .map(|(ch, frequency)| frequency.get(ch).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use crate::wordlists::loader::words_from_slice;

    fn mirrored_vocabulary() -> Vocabulary {
        let words = words_from_slice(&["abcde", "edcba", "aaaaa"]);
        let answers = words_from_slice(&["abcde", "edcba"]);
        Vocabulary::new(words, answers).unwrap()
    }

    fn rate_vocabulary() -> Vocabulary {
        Vocabulary::from_words(words_from_slice(&[
            "crane", "crate", "grate", "irate", "slate", "moist", "bumpy", "hilly",
        ]))
    }

    fn texts(set: &CandidateSet) -> Vec<String> {
        set.candidates().iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn new_set_holds_all_answers() {
        let vocabulary = mirrored_vocabulary();
        let set = CandidateSet::new(&vocabulary);

        assert_eq!(texts(&set), ["abcde", "edcba"]);
    }

    #[test]
    fn eliminate_leaves_exact_survivors() {
        let vocabulary = mirrored_vocabulary();
        let mut set = CandidateSet::new(&vocabulary);

        let feedback = classify("abcde", "edcba").unwrap();
        set.eliminate_words(&feedback);

        assert_eq!(texts(&set), ["edcba"]);
    }

    #[test]
    fn eliminate_is_idempotent() {
        let vocabulary = rate_vocabulary();
        let feedback = classify("crane", "grate").unwrap();

        let mut once = CandidateSet::new(&vocabulary);
        once.eliminate_words(&feedback);

        let mut twice = once.clone();
        twice.eliminate_words(&feedback);

        assert_eq!(texts(&once), texts(&twice));
    }

    #[test]
    fn eliminate_never_grows_and_keeps_secret() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let secret = "robot";
        let mut set = CandidateSet::new(&vocabulary);

        for guess in ["crane", "slate", "floor", "robin", "robot"] {
            let before = set.size();
            set.eliminate_words(&classify(guess, secret).unwrap());

            assert!(set.size() <= before);
            assert!(set.candidates().iter().any(|w| w.text() == secret));
        }
        assert_eq!(texts(&set), [secret]);
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let vocabulary = rate_vocabulary();
        let mut set = CandidateSet::new(&vocabulary);

        let feedback = Feedback::from_pattern(Word::new("zzzzz").unwrap(), "GGGGG").unwrap();
        set.eliminate_words(&feedback);

        assert!(set.is_empty());
        assert_eq!(set.find_best_guess(), None);
    }

    #[test]
    fn index_frequency_counts_letters_at_position() {
        let vocabulary = rate_vocabulary();
        let set = CandidateSet::new(&vocabulary);

        let first = set.index_frequency(0);
        assert_eq!(first.get(&b'c'), Some(&2));
        assert_eq!(first.get(&b'g'), Some(&1));
        assert_eq!(first.get(&b'z'), None);

        let middle = set.index_frequency(2);
        assert_eq!(middle.get(&b'a'), Some(&5));
        assert_eq!(middle.values().sum::<usize>(), set.size());
    }

    #[test]
    fn best_guess_has_highest_score() {
        let vocabulary = rate_vocabulary();
        let set = CandidateSet::new(&vocabulary);

        // crate: c2 + r4 + a5 + t4 + e5
        assert_eq!(set.find_best_guess().map(Word::text), Some("crate"));
    }

    #[test]
    fn best_guess_tie_goes_to_first_in_answer_order() {
        let words = words_from_slice(&["abcde", "edcba"]);
        let forward = Vocabulary::from_words(words.clone());
        let backward = Vocabulary::from_words(words.into_iter().rev().collect());

        assert_eq!(
            CandidateSet::new(&forward).find_best_guess().map(Word::text),
            Some("abcde")
        );
        assert_eq!(
            CandidateSet::new(&backward).find_best_guess().map(Word::text),
            Some("edcba")
        );
    }

    #[test]
    fn best_guess_on_empty_set_is_none() {
        let vocabulary = Vocabulary::from_words(Vec::new());
        assert_eq!(CandidateSet::new(&vocabulary).find_best_guess(), None);
    }

    #[test]
    fn second_best_guess_avoids_guessed_letters() {
        let vocabulary = rate_vocabulary();
        let set = CandidateSet::new(&vocabulary);
        let feedback = classify("crane", "hilly").unwrap();

        // bumpy and hilly both score 6, bumpy comes first
        assert_eq!(
            set.find_second_best_guess(&feedback).map(Word::text),
            Some("bumpy")
        );
    }

    #[test]
    fn second_best_guess_ignores_letter_classes() {
        let vocabulary = rate_vocabulary();
        let set = CandidateSet::new(&vocabulary);

        // Same guessed word, different colors: same probe
        let all_gray = classify("crane", "hilly").unwrap();
        let mostly_green = classify("crane", "crate").unwrap();
        assert_eq!(
            set.find_second_best_guess(&all_gray),
            set.find_second_best_guess(&mostly_green)
        );
    }

    #[test]
    fn second_best_guess_none_when_every_candidate_shares_a_letter() {
        let vocabulary = rate_vocabulary();
        let mut set = CandidateSet::new(&vocabulary);
        set.eliminate_words(&classify("crane", "grate").unwrap());

        let feedback = classify("slate", "grate").unwrap();
        assert_eq!(set.find_second_best_guess(&feedback), None);
    }

    #[test]
    fn second_best_guess_never_shares_letters_over_embedded_list() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let set = CandidateSet::new(&vocabulary);

        for guess in vocabulary.answers().iter().take(60) {
            let feedback = Feedback::calculate(guess, &vocabulary.answers()[0]);
            if let Some(probe) = set.find_second_best_guess(&feedback) {
                assert!(
                    !probe.shares_letter_with(guess),
                    "{probe} shares a letter with {guess}"
                );
            }
        }
    }

    #[test]
    fn number_of_matches_counts_green_and_yellow() {
        let vocabulary = rate_vocabulary();
        let set = CandidateSet::new(&vocabulary);

        assert_eq!(set.number_of_matches(&classify("crane", "hilly").unwrap()), 0);
        assert_eq!(set.number_of_matches(&classify("robot", "floor").unwrap()), 3);
        assert_eq!(set.number_of_matches(&classify("crate", "crate").unwrap()), 5);
    }

    #[test]
    fn remove_drops_one_candidate() {
        let vocabulary = rate_vocabulary();
        let mut set = CandidateSet::new(&vocabulary);

        assert!(set.remove("crate"));
        assert!(!set.remove("crate"));
        assert!(!set.remove("zzzzz"));
        assert_eq!(set.size(), 7);
        assert_eq!(set.find_best_guess().map(Word::text), Some("grate"));
    }
}
