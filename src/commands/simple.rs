//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Commands are typed in full; each guess
//! is echoed back with verdict colors plus the letter-knowledge line.

use super::display::{colorize_scored, letter_keys_line};
use crate::core::Word;
use crate::game::{EndGameStatus, GameStateMachine, MAX_ATTEMPTS};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut GameStateMachine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            GRIDLE - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Type a guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for the next word, 'reuse' to requeue this word\n");

    loop {
        let Some(word_len) = game.state().target_word.as_ref().map(Word::len) else {
            println!("No words to play!");
            return Ok(());
        };

        let attempts_left = MAX_ATTEMPTS - game.state().submitted_guesses.len();
        println!(
            "\n{word_len}-letter word | {attempts_left} attempt(s) left | {} word(s) queued",
            game.queue().len()
        );
        println!("  {}", letter_keys_line(game.state()));

        let input = get_user_input("Guess")?;

        match input.as_str() {
            "quit" | "q" => return Ok(()),
            "new" | "n" => {
                if !advance(game, false) {
                    return Ok(());
                }
                continue;
            }
            "reuse" | "r" => {
                if !advance(game, true) {
                    return Ok(());
                }
                continue;
            }
            guess if guess.chars().count() != word_len => {
                println!(
                    "{}",
                    format!("Guess must be exactly {word_len} letters!").red()
                );
                continue;
            }
            guess => {
                for letter in guess.chars() {
                    game.add_pending_guess(letter);
                }
                game.submit_pending_guesses();

                if let Some(scored) = game.state().submitted_guesses.last() {
                    println!("  {}", colorize_scored(scored));
                }
            }
        }

        if let Some(status) = game.state().end_game_status {
            game.dismiss_modal();

            let target = game
                .state()
                .target_word
                .as_ref()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();

            match status {
                EndGameStatus::Won => {
                    let turns = game.state().submitted_guesses.len();
                    println!("\n{} Got {target} in {turns} guess(es)!", "✓".green().bold());
                }
                EndGameStatus::Lost => {
                    println!("\n{} Out of attempts! The word was {target}.", "✗".red().bold());
                }
            }

            match get_user_input("[n]ext word, [r]eplay word, [q]uit")?.as_str() {
                "r" | "reuse" | "replay" => {
                    if !advance(game, true) {
                        return Ok(());
                    }
                }
                "q" | "quit" => return Ok(()),
                _ => {
                    if !advance(game, false) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Restart onto the next word; false when the backlog is exhausted
fn advance(game: &mut GameStateMachine, reuse_word: bool) -> bool {
    let can_draw =
        !game.queue().is_empty() || (reuse_word && game.state().target_word.is_some());

    if !can_draw {
        println!("\nNo more words in the list. Thanks for playing!");
        return false;
    }

    game.restart(reuse_word);
    true
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
