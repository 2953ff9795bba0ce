//! Word list loading utilities
//!
//! Functions to load word lists from files or from the embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use gridle::wordlists::{WORDS, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep only words matching the length of the first one
///
/// A game instance plays at a single word length; mixed-length files keep
/// their leading length and drop the rest.
#[must_use]
pub fn uniform_length(words: Vec<Word>) -> Vec<Word> {
    let Some(len) = words.first().map(Word::len) else {
        return words;
    };

    words.into_iter().filter(|w| w.len() == len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["test", "poop", "turd"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "test");
        assert_eq!(words[1].text(), "poop");
        assert_eq!(words[2].text(), "turd");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["test", "t3st", "", "turd"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "test");
        assert_eq!(words[1].text(), "turd");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn uniform_length_keeps_leading_length() {
        let words = words_from_slice(&["test", "crane", "turd", "ox"]);
        let uniform = uniform_length(words);

        assert_eq!(uniform.len(), 2);
        assert_eq!(uniform[0].text(), "test");
        assert_eq!(uniform[1].text(), "turd");
    }

    #[test]
    fn uniform_length_of_empty_is_empty() {
        assert!(uniform_length(vec![]).is_empty());
    }

    #[test]
    fn embedded_words_convert_cleanly() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
