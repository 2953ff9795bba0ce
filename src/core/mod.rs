//! Core domain types for the word game
//!
//! Fundamental types with no knowledge of rounds or UI: words, per-letter
//! verdicts, and the guess-scoring algorithm.

mod verdict;
mod word;

pub use verdict::{ScoredGuess, Verdict, score_guess};
pub use word::{Word, WordError};
