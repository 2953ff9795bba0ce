//! Game state machine
//!
//! All rules live in [`transition`], a pure function from a snapshot, the
//! word backlog, and one command to the next snapshot and backlog. Invalid
//! or premature commands (typing past the word length, deleting with nothing
//! pending, submitting an incomplete guess, touching a finished round,
//! restarting with no words left) are silent no-ops returning the state
//! unchanged, never errors; the UI cannot always prevent such calls and the
//! machine must stay total.
//!
//! [`GameStateMachine`] wraps the reducer, replacing its snapshot wholesale
//! on every command.

use super::queue::WordQueue;
use super::state::{EndGameStatus, GameState};
use crate::core::{Verdict, Word, score_guess};

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 4;

/// One player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a letter to the pending guess
    AddPendingGuess(char),
    /// Remove the last pending letter
    DeletePendingGuess,
    /// Score the pending guess against the target
    SubmitPendingGuesses,
    /// Hide the end-of-round modal
    DismissModal,
    /// Abandon the current round and draw the next target; with `reuse_word`
    /// the outgoing target is pushed to the back of the queue first
    Restart { reuse_word: bool },
}

/// Apply one command, producing the next snapshot and queue
///
/// Pure: inputs are never mutated, and the returned snapshot shares no
/// collections with the previous one.
#[must_use]
pub fn transition(
    state: &GameState,
    queue: &WordQueue,
    command: &Command,
) -> (GameState, WordQueue) {
    match command {
        Command::AddPendingGuess(letter) => (add_pending_guess(state, *letter), queue.clone()),
        Command::DeletePendingGuess => (delete_pending_guess(state), queue.clone()),
        Command::SubmitPendingGuesses => (submit_pending_guesses(state), queue.clone()),
        Command::DismissModal => (dismiss_modal(state), queue.clone()),
        Command::Restart { reuse_word } => restart(state, queue, *reuse_word),
    }
}

fn add_pending_guess(state: &GameState, letter: char) -> GameState {
    if state.is_over() || state.pending_guess.len() == state.word_len() {
        return state.clone();
    }

    let mut next = state.clone();
    next.pending_guess.push(letter);
    next
}

fn delete_pending_guess(state: &GameState) -> GameState {
    if state.is_over() || state.pending_guess.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    next.pending_guess.pop();
    next
}

fn submit_pending_guesses(state: &GameState) -> GameState {
    let Some(target) = &state.target_word else {
        return state.clone();
    };

    if state.is_over() || state.pending_guess.len() != target.len() {
        return state.clone();
    }

    let scored = score_guess(&state.pending_guess, target);

    let mut next = state.clone();
    next.pending_guess.clear();

    // Upgrade-only merge: a letter's recorded verdict never weakens
    for &(letter, verdict) in &scored {
        next.letter_keys
            .entry(letter)
            .and_modify(|best| *best = verdict.max(*best))
            .or_insert(verdict);
    }

    let won = scored.iter().all(|&(_, v)| v == Verdict::Correct);
    next.submitted_guesses.push(scored);

    next.end_game_status = if won {
        Some(EndGameStatus::Won)
    } else if next.submitted_guesses.len() >= MAX_ATTEMPTS {
        Some(EndGameStatus::Lost)
    } else {
        None
    };
    next.show_end_game_modal = next.end_game_status.is_some();

    next
}

fn dismiss_modal(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.show_end_game_modal = false;
    next
}

fn restart(state: &GameState, queue: &WordQueue, reuse_word: bool) -> (GameState, WordQueue) {
    let mut next_queue = queue.clone();

    if reuse_word && let Some(target) = &state.target_word {
        next_queue.push_back(target.clone());
    }

    match next_queue.pop_front() {
        Some(target) => (GameState::new_round(Some(target)), next_queue),
        // Out of words: the previous round stays on screen untouched
        None => (state.clone(), queue.clone()),
    }
}

/// Owns the current snapshot and the word backlog
///
/// Each command method routes through [`transition`] and replaces the
/// snapshot; `state()` hands out the current read-only snapshot.
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    state: GameState,
    queue: WordQueue,
}

impl GameStateMachine {
    /// Start a game: the first word of the list becomes the target
    ///
    /// An empty list yields a state with no target, where every command is
    /// a no-op; what to display for it is the caller's concern.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut queue = WordQueue::new(words);
        let target = queue.pop_front();

        Self {
            state: GameState::new_round(target),
            queue,
        }
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Words still waiting in the backlog
    #[must_use]
    pub const fn queue(&self) -> &WordQueue {
        &self.queue
    }

    /// Apply one command and return the new snapshot
    pub fn apply(&mut self, command: &Command) -> &GameState {
        let (state, queue) = transition(&self.state, &self.queue, command);
        self.state = state;
        self.queue = queue;
        &self.state
    }

    /// Append a letter to the pending guess
    pub fn add_pending_guess(&mut self, letter: char) {
        self.apply(&Command::AddPendingGuess(letter));
    }

    /// Remove the last pending letter
    pub fn delete_pending_guess(&mut self) {
        self.apply(&Command::DeletePendingGuess);
    }

    /// Score and record the pending guess
    pub fn submit_pending_guesses(&mut self) {
        self.apply(&Command::SubmitPendingGuesses);
    }

    /// Hide the end-of-round modal
    pub fn dismiss_modal(&mut self) {
        self.apply(&Command::DismissModal);
    }

    /// Draw the next target word, optionally requeueing the current one
    pub fn restart(&mut self, reuse_word: bool) {
        self.apply(&Command::Restart { reuse_word });
    }
}
