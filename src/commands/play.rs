//! Play mode
//!
//! The user guesses a secret picked at random from the answer list.

use super::assist::prompt;
use crate::core::Answer;
use crate::error::WordleError;
use crate::output::formatters::feedback_to_colored;
use crate::wordlists::Vocabulary;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a game of play mode ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    Lost { secret: String },
    Quit,
}

/// Play one game against a random secret
///
/// Illegal guesses are reported and do not use up a turn.
///
/// # Errors
///
/// Returns an error on I/O failure or if the answer list is empty.
pub fn run_play<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    rng: &mut R,
    max_guesses: usize,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PlayOutcome> {
    let answer = Answer::random(vocabulary, rng)?;
    writeln!(
        output,
        "Guess the {}-letter word in {max_guesses} tries ('quit' to give up).",
        vocabulary.word_length()
    )?;

    let mut turn = 1;
    while turn <= max_guesses {
        let Some(line) = prompt(input, output, &format!("Guess {turn}"))? else {
            return Ok(PlayOutcome::Quit);
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(output, "The word was {}.", answer.word().text().to_uppercase())?;
            return Ok(PlayOutcome::Quit);
        }

        match answer.make_guess(&line) {
            Ok(feedback) => {
                writeln!(output, "{}", feedback_to_colored(&feedback))?;
                if feedback.is_perfect() {
                    writeln!(output, "🎉 Solved in {turn} guesses!")?;
                    return Ok(PlayOutcome::Won { guesses: turn });
                }
                turn += 1;
            }
            Err(WordleError::InvalidInput(reason)) => writeln!(output, "❌ {reason}")?,
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(output, "Out of guesses! The word was {}.", answer.word().text().to_uppercase())?;
    Ok(PlayOutcome::Lost {
        secret: answer.word().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        let words = words_from_slice(&["abcde", "edcba", "aaaaa"]);
        let answers = words_from_slice(&["edcba"]);
        Vocabulary::new(words, answers).unwrap()
    }

    fn play(script: &str, max_guesses: usize) -> (PlayOutcome, String) {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = script.as_bytes();
        let mut output = Vec::new();

        let outcome = run_play(&vocabulary, &mut rng, max_guesses, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_counts_only_legal_guesses() {
        let (outcome, transcript) = play("zzzzz\nabcde\nedcba\n", 6);

        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(transcript.contains("not a legal guess"));
    }

    #[test]
    fn running_out_of_guesses_reveals_secret() {
        let (outcome, transcript) = play("aaaaa\nabcde\n", 2);

        assert_eq!(
            outcome,
            PlayOutcome::Lost {
                secret: "edcba".to_string()
            }
        );
        assert!(transcript.contains("EDCBA"));
    }

    #[test]
    fn quit_and_end_of_input() {
        assert_eq!(play("quit\n", 6).0, PlayOutcome::Quit);
        assert_eq!(play("", 6).0, PlayOutcome::Quit);
    }
}
