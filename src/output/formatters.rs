//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterClass};
use colored::Colorize;

/// Format feedback as colored letter tiles, e.g. " C  R  A  N  E " on green/yellow/gray
#[must_use]
pub fn feedback_to_colored(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, class)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            match class {
                LetterClass::Correct => tile.black().on_green().to_string(),
                LetterClass::Present => tile.black().on_yellow().to_string(),
                LetterClass::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
