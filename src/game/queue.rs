//! Ordered backlog of upcoming target words

use crate::core::Word;
use std::collections::VecDeque;

/// Queue of candidate target words, consumed front-to-back
///
/// A word leaves the queue the moment it becomes the active target. Restart
/// with reuse pushes the outgoing target back before drawing, so the word
/// becomes guessable again after the remaining backlog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQueue {
    words: VecDeque<Word>,
}

impl WordQueue {
    /// Create a queue from an ordered word list
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words: words.into(),
        }
    }

    /// Draw the next target word, if any
    pub fn pop_front(&mut self) -> Option<Word> {
        self.words.pop_front()
    }

    /// Append a word to the back of the backlog
    pub fn push_back(&mut self, word: Word) {
        self.words.push_back(word);
    }

    /// Number of words still queued
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordQueue {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
