//! Shared terminal formatting for the CLI modes

use crate::core::{ScoredGuess, Verdict};
use crate::game::GameState;
use colored::Colorize;

/// Render a scored guess as colored uppercase letters
#[must_use]
pub fn colorize_scored(scored: &ScoredGuess) -> String {
    scored
        .iter()
        .map(|&(letter, verdict)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => letter.green().bold().to_string(),
                Verdict::Present => letter.yellow().bold().to_string(),
                Verdict::Incorrect => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Render the a-z letter knowledge line
///
/// Letters with a recorded verdict are colored like the board; letters not
/// yet played stay plain.
#[must_use]
pub fn letter_keys_line(state: &GameState) -> String {
    ('a'..='z')
        .map(|letter| {
            let shown = letter.to_ascii_uppercase().to_string();
            match state.letter_keys.get(&letter) {
                Some(Verdict::Correct) => format!("{} ", shown.green().bold()),
                Some(Verdict::Present) => format!("{} ", shown.yellow().bold()),
                Some(Verdict::Incorrect) => format!("{} ", shown.bright_black()),
                None => format!("{shown} "),
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}
