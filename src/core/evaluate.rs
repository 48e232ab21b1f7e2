//! Guess evaluation
//!
//! Classifies every letter of a guess against the target word:
//! - Correct: same letter at the same position
//! - Present: letter occurs at another, not yet consumed, target position
//! - Absent: no unconsumed occurrence left in the target
//!
//! Each target position can satisfy at most one guess letter, and exact
//! matches are settled before any displaced match is considered.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Emoji square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// A guessed letter together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    letter: char,
    state: LetterState,
}

impl LetterResult {
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(self) -> LetterState {
        self.state
    }
}

/// One evaluated guess: a classification for every position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRow([LetterResult; WORD_LENGTH]);

impl GuessRow {
    /// Letter results in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Classifications in guess order
    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.0.iter().map(|r| r.state)
    }

    /// True when every letter is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.states().all(|s| s == LetterState::Correct)
    }

    /// The guessed word as written in this row
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|r| r.letter).collect()
    }

    /// Share string such as "🟨🟨🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: every exact positional match is Correct and consumes that
///    target position
/// 2. Second pass: each remaining guess letter, left to right, takes the
///    earliest unconsumed target position holding the same letter (Present),
///    or is Absent when none is left
///
/// # Examples
/// ```
/// use shoutdle::core::{LetterState::*, Word, evaluate_guess};
///
/// let guess = Word::new("react").unwrap();
/// let target = Word::new("crane").unwrap();
/// let row = evaluate_guess(&guess, &target);
///
/// let states: Vec<_> = row.states().collect();
/// assert_eq!(states, [Present, Present, Correct, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, target: &Word) -> GuessRow {
    let guess = guess.letters();
    let target = target.letters();

    let mut states: [Option<LetterState>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // Exact matches
    // Allow: index needed to compare guess[i] with target[i] and set both flags
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            states[i] = Some(LetterState::Correct);
            consumed[i] = true;
        }
    }

    // Displaced matches against whatever is still unconsumed
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if states[i].is_some() {
            continue;
        }

        let found = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]);
        states[i] = Some(match found {
            Some(j) => {
                consumed[j] = true;
                LetterState::Present
            }
            None => LetterState::Absent,
        });
    }

    GuessRow(std::array::from_fn(|i| LetterResult {
        letter: char::from(guess[i]),
        state: states[i].unwrap_or(LetterState::Absent),
    }))
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn states(guess: &str, target: &str) -> Vec<LetterState> {
        let row = evaluate_guess(&Word::new(guess).unwrap(), &Word::new(target).unwrap());
        row.states().collect()
    }

    #[test]
    fn same_word_is_all_correct() {
        for word in ["CRANE", "SPEED", "AAAAA", "ROBOT", "SHOUT"] {
            let w = Word::new(word).unwrap();
            assert!(evaluate_guess(&w, &w).is_win(), "{word} against itself");
        }
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        assert_eq!(states("FIGHT", "CRANE"), [Absent; 5]);
    }

    #[test]
    fn react_against_crane() {
        assert_eq!(
            states("REACT", "CRANE"),
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn trace_against_crane() {
        assert_eq!(
            states("TRACE", "CRANE"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn repeated_letters_consume_target_once() {
        // SPEED holds two E's, ERASE spends both of them
        assert_eq!(
            states("ERASE", "SPEED"),
            [Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_displaced_match() {
        // The second O is exact; the first O must not steal it
        assert_eq!(
            states("ROBOT", "FLOOR"),
            [Present, Present, Absent, Correct, Absent]
        );
        // Both L's of the target go to exact matches, the leading L gets nothing
        assert_eq!(
            states("LOLLY", "HELLO"),
            [Absent, Present, Correct, Correct, Absent]
        );
        assert_eq!(states("ALLOY", "LEMON"), [Absent, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn earliest_guess_position_wins_remaining_letter() {
        // One E left after the exact match; the first E in the guess takes it
        assert_eq!(
            states("EERIE", "THEME"),
            [Present, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn letter_credit_never_exceeds_target_count() {
        let words = ["SPEED", "ERASE", "EERIE", "LLAMA", "HELLO", "ROBOT", "FLOOR", "AAAAA"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let row = evaluate_guess(&g, &t);

                for letter in b'A'..=b'Z' {
                    let credited = row
                        .letters()
                        .iter()
                        .filter(|r| r.letter() == char::from(letter) && r.state() != Absent)
                        .count();
                    assert!(
                        credited <= t.count_of(letter),
                        "{guess} vs {target}: {} credited {credited} times",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn row_keeps_guess_letters_in_order() {
        let row = evaluate_guess(&Word::new("react").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(row.word(), "REACT");
        assert_eq!(row.to_emoji(), "🟨🟨🟩🟨⬜");
        assert_eq!(row.to_string(), "REACT 🟨🟨🟩🟨⬜");
    }
}
