//! Game word representation
//!
//! A Word stores a lowercase ASCII word along with its letters for scoring.
//! Word length is not fixed at the type level; a game instance derives it
//! from the active target word (the shipped word list uses 4 letters).

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase target or guess word
///
/// Stores the word as both text and a letter vector for position access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use gridle::core::Word;
    ///
    /// let word = Word::new("turd").unwrap();
    /// assert_eq!(word.text(), "turd");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("t3st").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: Vec<char> = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed Word, provided for completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("test").unwrap();
        assert_eq!(word.text(), "test");
        assert_eq!(word.chars(), &['t', 'e', 's', 't']);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("TEST").unwrap();
        assert_eq!(word.text(), "test");

        let word2 = Word::new("TeSt").unwrap();
        assert_eq!(word2.text(), "test");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("crane").unwrap().len(), 5);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("tes3").is_err()); // Number
        assert!(Word::new("tes ").is_err()); // Space
        assert!(Word::new("tes!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("poop").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'p'), Some(&2));
        assert_eq!(counts.get(&'o'), Some(&2));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("turd").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("turd").unwrap();
        assert_eq!(format!("{word}"), "turd");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("test").unwrap();
        let word2 = Word::new("TEST").unwrap();
        let word3 = Word::new("turd").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
