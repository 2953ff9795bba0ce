//! Immutable game state snapshots

use crate::core::{ScoredGuess, Verdict, Word};
use rustc_hash::FxHashMap;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndGameStatus {
    Won,
    Lost,
}

/// One snapshot of the whole game state
///
/// A snapshot is replaced wholesale on every command; its collections are
/// never shared between snapshots, so a snapshot held by a caller stays
/// valid and unchanged as the game advances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Active secret to guess; absent when initialized from an empty list
    pub target_word: Option<Word>,
    /// Letters typed but not yet submitted, at most `word_len` of them
    pub pending_guess: Vec<char>,
    /// Scored guesses this round, in submission order
    pub submitted_guesses: Vec<ScoredGuess>,
    /// Best verdict seen so far for each letter that appeared in a submission
    pub letter_keys: FxHashMap<char, Verdict>,
    /// None while the round is in progress
    pub end_game_status: Option<EndGameStatus>,
    /// True from the moment the round ends until the caller dismisses it
    pub show_end_game_modal: bool,
}

impl GameState {
    /// Fresh state for a new round against `target`
    #[must_use]
    pub(crate) fn new_round(target: Option<Word>) -> Self {
        Self {
            target_word: target,
            ..Self::default()
        }
    }

    /// Length of the active target word, 0 when there is none
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.target_word.as_ref().map_or(0, Word::len)
    }

    /// True once the round has been won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_game_status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_resets_everything_but_target() {
        let target = Word::new("test").unwrap();
        let state = GameState::new_round(Some(target.clone()));

        assert_eq!(state.target_word, Some(target));
        assert!(state.pending_guess.is_empty());
        assert!(state.submitted_guesses.is_empty());
        assert!(state.letter_keys.is_empty());
        assert_eq!(state.end_game_status, None);
        assert!(!state.show_end_game_modal);
    }

    #[test]
    fn word_len_follows_target() {
        assert_eq!(GameState::new_round(None).word_len(), 0);

        let state = GameState::new_round(Some(Word::new("crane").unwrap()));
        assert_eq!(state.word_len(), 5);
    }

    #[test]
    fn is_over_tracks_status() {
        let mut state = GameState::new_round(Some(Word::new("test").unwrap()));
        assert!(!state.is_over());

        state.end_game_status = Some(EndGameStatus::Won);
        assert!(state.is_over());
    }
}
