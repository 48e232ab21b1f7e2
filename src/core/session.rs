//! Game session state machine
//!
//! A `GameSession` owns one round: the target word, a fixed board of
//! [`MAX_ATTEMPTS`] rows and the round status. Every accepted guess fills
//! exactly one row; rejected guesses leave the session untouched.

use super::{GuessRow, MAX_ATTEMPTS, WORD_LENGTH, Word, WordError, WordSource, evaluate_guess};
use thiserror::Error;
use tracing::{debug, info};

/// Status of a round. Only moves forward from `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submitted guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Word must be {expected} letters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Not in word list: {0}")]
    NotInVocabulary(String),
    #[error("Game is already over")]
    GameAlreadyOver,
}

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: Word,
    rows: [Option<GuessRow>; MAX_ATTEMPTS],
    attempts_used: usize,
    status: GameStatus,
}

impl GameSession {
    /// Start a new round for `target`
    #[must_use]
    pub fn start(target: Word) -> Self {
        debug!(target = %target, "starting round");
        Self {
            target,
            rows: [None; MAX_ATTEMPTS],
            attempts_used: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Replace this round with a fresh one for `new_target`
    pub fn reset(&mut self, new_target: Word) {
        *self = Self::start(new_target);
    }

    /// Submit a guess
    ///
    /// The input is trimmed and uppercased before validation. Checks run in
    /// order: round still in progress, length, vocabulary membership.
    ///
    /// # Errors
    /// - `GameAlreadyOver` when the round is Won or Lost
    /// - `WrongLength` when the input does not have [`WORD_LENGTH`] characters
    /// - `NotInVocabulary` when `vocabulary` does not accept the word
    ///
    /// The session is unchanged whenever an error is returned.
    ///
    /// # Examples
    /// ```
    /// use shoutdle::core::{GameSession, GameStatus, GuessError, Word};
    /// use shoutdle::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["crane", "react"], &[]).unwrap();
    /// let mut session = GameSession::start(Word::new("crane").unwrap());
    ///
    /// assert!(matches!(
    ///     session.submit_guess("zzzzz", &list),
    ///     Err(GuessError::NotInVocabulary(_))
    /// ));
    /// assert_eq!(session.attempts_used(), 0);
    ///
    /// let row = session.submit_guess("crane", &list).unwrap();
    /// assert!(row.is_win());
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess<V>(&mut self, input: &str, vocabulary: &V) -> Result<&GuessRow, GuessError>
    where
        V: WordSource + ?Sized,
    {
        if self.status != GameStatus::InProgress {
            debug!(input, "guess rejected, round is over");
            return Err(GuessError::GameAlreadyOver);
        }

        let guess = Word::new(input).map_err(|e| match e {
            WordError::InvalidLength(actual) => GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual,
            },
            WordError::InvalidCharacters => {
                GuessError::NotInVocabulary(input.trim().to_uppercase())
            }
        })?;

        if !vocabulary.is_acceptable(&guess) {
            debug!(guess = %guess, "guess rejected, not in vocabulary");
            return Err(GuessError::NotInVocabulary(guess.text().to_string()));
        }

        let row = evaluate_guess(&guess, &self.target);
        let index = self.attempts_used;
        self.attempts_used += 1;

        if row.is_win() {
            self.status = GameStatus::Won;
            info!(attempts = self.attempts_used, "round won");
        } else if self.attempts_used == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            info!(target = %self.target, "round lost");
        } else {
            debug!(row = %row, attempt = self.attempts_used, "guess accepted");
        }

        Ok(&*self.rows[index].insert(row))
    }

    /// The answer for this round
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// All board rows; `None` is a row not yet played
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Option<GuessRow>; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Rows filled so far, oldest first
    pub fn submitted_rows(&self) -> impl Iterator<Item = &GuessRow> + '_ {
        self.rows.iter().flatten()
    }

    /// The most recently filled row
    #[must_use]
    pub fn last_row(&self) -> Option<&GuessRow> {
        self.attempts_used
            .checked_sub(1)
            .and_then(|i| self.rows[i].as_ref())
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the round is Won or Lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}
