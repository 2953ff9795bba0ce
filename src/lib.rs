//! Gridle
//!
//! A Wordle-style word guessing game. All rules live in a pure, total state
//! machine: commands never fail, invalid input is a silent no-op, and every
//! command yields a fresh immutable snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use gridle::core::Word;
//! use gridle::game::{EndGameStatus, GameStateMachine};
//!
//! let words = vec![Word::new("test").unwrap(), Word::new("poop").unwrap()];
//! let mut game = GameStateMachine::new(words);
//!
//! for letter in "test".chars() {
//!     game.add_pending_guess(letter);
//! }
//! game.submit_pending_guesses();
//!
//! assert_eq!(game.state().end_game_status, Some(EndGameStatus::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
