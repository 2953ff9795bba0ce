//! One-off guess scoring command
//!
//! Scores a single guess against a target and prints the verdicts; handy
//! for checking how duplicate letters resolve.

use super::display::colorize_scored;
use crate::core::{ScoredGuess, Word, score_guess};

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word fails validation or the lengths differ.
pub fn score_words(target: &str, guess: &str) -> Result<ScoredGuess, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess word: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess must match target length ({} letters, got {})",
            target.len(),
            guess.len()
        ));
    }

    Ok(score_guess(guess.chars(), &target))
}

/// Score and print one guess
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn run_score(target: &str, guess: &str) -> Result<(), String> {
    let scored = score_words(target, guess)?;

    println!("\n  {}", colorize_scored(&scored));
    for &(letter, verdict) in &scored {
        println!("  {} {verdict}", letter.to_ascii_uppercase());
    }

    Ok(())
}
