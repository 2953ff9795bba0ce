//! Word lists for the game
//!
//! Provides an embedded default list compiled into the binary plus a file
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORD_COUNT, WORD_LEN, WORDS};
