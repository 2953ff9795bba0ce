//! Round and game-state management
//!
//! The state machine, its pure transition function, and the word backlog.

mod machine;
mod queue;
mod state;

pub use machine::{Command, GameStateMachine, MAX_ATTEMPTS, transition};
pub use queue::WordQueue;
pub use state::{EndGameStatus, GameState};
