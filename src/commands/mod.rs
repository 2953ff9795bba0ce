//! Command implementations

mod display;
pub mod score;
pub mod simple;

pub use score::{run_score, score_words};
pub use simple::run_simple;
