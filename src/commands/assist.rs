//! Interactive helper mode
//!
//! Suggests guesses for a game played elsewhere; the user types back the colors they got.

use crate::core::Feedback;
use crate::output::formatters::feedback_to_colored;
use crate::solver::Strategy;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Run the helper loop until the user quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure. Running out of candidates is reported to
/// the user, who can then start over.
pub fn run_assist<'a, S: Strategy<'a>>(
    strategy: &mut S,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(output, "I'll suggest guesses ranked by positional letter frequency.")?;
    writeln!(output, "After each guess, enter the feedback pattern:")?;
    writeln!(output, "  G/g/🟩 green, Y/y/🟨 yellow, -/_/⬜ gray, or 'win'")?;
    writeln!(output, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    strategy.reset();
    let mut feedback: Option<Feedback> = None;

    loop {
        let guess = match strategy.make_guess(feedback.as_ref()) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "❌ {e}. Your feedback may be incorrect; starting over.\n")?;
                strategy.reset();
                feedback = None;
                continue;
            }
        };

        writeln!(
            output,
            "Turn {}: try {} ({} candidates remaining)",
            strategy.turn(),
            guess.text().to_uppercase(),
            strategy.remaining()
        )?;

        feedback = loop {
            let Some(line) = prompt(input, output, "Feedback")? else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => {
                    strategy.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                    break None;
                }
                "win" | "correct" | "solved" => {
                    writeln!(output, "🎉 Solved in {} guesses!\n", strategy.turn())?;
                    strategy.reset();
                    break None;
                }
                _ => match Feedback::from_pattern(guess.clone(), &line) {
                    Ok(fb) if fb.is_perfect() => {
                        writeln!(output, "{}", feedback_to_colored(&fb))?;
                        writeln!(output, "🎉 Solved in {} guesses!\n", strategy.turn())?;
                        strategy.reset();
                        break None;
                    }
                    Ok(fb) => {
                        writeln!(output, "{}", feedback_to_colored(&fb))?;
                        break Some(fb);
                    }
                    Err(e) => writeln!(output, "❌ {e}")?,
                },
            }
        };
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
pub(crate) fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok((read > 0).then(|| line.trim().to_string()))
}
