//! Gridle - CLI
//!
//! Wordle-style word guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gridle::{
    commands::{run_score, run_simple},
    core::Word,
    game::GameStateMachine,
    interactive::{App, run_tui},
    wordlists::{
        WORDS,
        loader::{load_from_file, uniform_length, words_from_slice},
    },
};
use rand::seq::SliceRandom;

#[derive(Parser)]
#[command(
    name = "gridle",
    about = "Wordle-style word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Shuffle the word list before playing
    #[arg(long, global = true)]
    shuffle: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word queue based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => uniform_length(load_from_file(path)?),
    };

    Ok(words)
}

/// Build a fresh game from the CLI's word-list options
fn new_game(cli: &Cli) -> Result<GameStateMachine> {
    let mut words = load_words(&cli.wordlist)?;

    if cli.shuffle {
        words.shuffle(&mut rand::rng());
    }

    Ok(GameStateMachine::new(words))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Play => {
            let game = new_game(&cli)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = new_game(&cli)?;
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { target, guess } => {
            run_score(&target, &guess).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
