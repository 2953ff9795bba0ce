//! Per-letter verdicts and guess scoring
//!
//! Scoring follows Wordle's feedback rules, including correct handling of
//! duplicate letters: a letter can only earn as many correct/present marks
//! as it has occurrences in the target.

use super::Word;
use std::fmt;

/// Scoring outcome for a single letter position
///
/// Variant order defines verdict strength: `Incorrect < Present < Correct`.
/// The derived `Ord` drives the upgrade-only letter-knowledge merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter not usable at this position given remaining counts
    Incorrect,
    /// Right letter, wrong position
    Present,
    /// Right letter, right position
    Correct,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incorrect => write!(f, "incorrect"),
            Self::Present => write!(f, "present"),
            Self::Correct => write!(f, "correct"),
        }
    }
}

/// One scored guess: `(letter, verdict)` per position, in guess order
pub type ScoredGuess = Vec<(char, Verdict)>;

/// Score a guess against a target word
///
/// Two passes so duplicate letters are marked correctly:
/// 1. Exact position matches become `Correct` and consume an occurrence
///    from the target's per-letter pool.
/// 2. Remaining positions, left to right, become `Present` while their
///    letter still has occurrences left in the pool, else `Incorrect`.
///
/// The left-to-right order of the second pass is observable when a letter
/// repeats in the guess more often than in the target: earlier positions
/// win the remaining occurrences.
///
/// # Examples
/// ```
/// use gridle::core::{Verdict, Word, score_guess};
///
/// let target = Word::new("poop").unwrap();
/// let scored = score_guess(&['p', 'p', 'o', 'o'], &target);
/// assert_eq!(
///     scored,
///     vec![
///         ('p', Verdict::Correct),
///         ('p', Verdict::Present),
///         ('o', Verdict::Correct),
///         ('o', Verdict::Present),
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &[char], target: &Word) -> ScoredGuess {
    let mut verdicts = vec![Verdict::Incorrect; guess.len()];
    let mut available = target.char_counts();

    // First pass: exact matches consume from the pool
    for (i, &letter) in guess.iter().enumerate() {
        if target.chars().get(i) == Some(&letter) {
            verdicts[i] = Verdict::Correct;

            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, while the pool lasts
    for (i, &letter) in guess.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }

        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    guess.iter().copied().zip(verdicts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn verdicts(scored: &ScoredGuess) -> Vec<Verdict> {
        scored.iter().map(|&(_, v)| v).collect()
    }

    #[test]
    fn verdict_strength_ordering() {
        assert!(Verdict::Incorrect < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Correct.to_string(), "correct");
        assert_eq!(Verdict::Present.to_string(), "present");
        assert_eq!(Verdict::Incorrect.to_string(), "incorrect");
    }

    #[test]
    fn score_all_correct() {
        let scored = score_guess(&['t', 'e', 's', 't'], &word("test"));
        assert_eq!(verdicts(&scored), vec![Verdict::Correct; 4]);
    }

    #[test]
    fn score_all_incorrect() {
        let scored = score_guess(&['a', 'b', 'c', 'd'], &word("poop"));
        assert_eq!(verdicts(&scored), vec![Verdict::Incorrect; 4]);
    }

    #[test]
    fn score_duplicate_letters_exact_match_takes_priority() {
        // "poop" vs "ppoo": the exact matches at positions 0 and 2 claim
        // one p and one o each, leaving one of each for the misplaced pair.
        let scored = score_guess(&['p', 'p', 'o', 'o'], &word("poop"));
        assert_eq!(
            scored,
            vec![
                ('p', Verdict::Correct),
                ('p', Verdict::Present),
                ('o', Verdict::Correct),
                ('o', Verdict::Present),
            ]
        );
    }

    #[test]
    fn score_duplicate_letters_pool_exhausted() {
        // "test" has two t's. The guess "sttt" spends one on the exact
        // match at position 3, one on the misplaced t at position 1, and
        // the t at position 2 finds the pool empty.
        let scored = score_guess(&['s', 't', 't', 't'], &word("test"));
        assert_eq!(
            scored,
            vec![
                ('s', Verdict::Present),
                ('t', Verdict::Present),
                ('t', Verdict::Incorrect),
                ('t', Verdict::Correct),
            ]
        );
    }

    #[test]
    fn score_second_pass_is_left_to_right() {
        // One o in the target, two misplaced o's in the guess: the
        // leftmost one gets the present mark.
        let scored = score_guess(&['o', 'x', 'o', 'x'], &word("zzzo"));
        assert_eq!(
            verdicts(&scored),
            vec![
                Verdict::Present,
                Verdict::Incorrect,
                Verdict::Incorrect,
                Verdict::Incorrect,
            ]
        );
    }

    #[test]
    fn score_preserves_guess_letters_in_order() {
        let scored = score_guess(&['t', 's', 'e', 't'], &word("test"));
        let letters: Vec<char> = scored.iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, vec!['t', 's', 'e', 't']);
    }

    #[test]
    fn score_shorter_guess_does_not_panic() {
        let scored = score_guess(&['t', 'e'], &word("test"));
        assert_eq!(
            verdicts(&scored),
            vec![Verdict::Correct, Verdict::Correct]
        );
    }

    #[test]
    fn score_longer_guess_does_not_panic() {
        let scored = score_guess(&['t', 'e', 's', 't', 's'], &word("test"));
        assert_eq!(scored.len(), 5);
        assert_eq!(scored[4], ('s', Verdict::Incorrect));
    }

    #[test]
    fn score_non_alphabetic_letters_are_incorrect() {
        // The core accepts any char verbatim; unknown letters just never
        // match the pool.
        let scored = score_guess(&['!', 'e', 's', 't'], &word("test"));
        assert_eq!(scored[0], ('!', Verdict::Incorrect));
    }
}
