//! Core game types for Shoutdle
//!
//! The evaluator and the session state machine. Nothing here renders,
//! reads input or touches the filesystem.

mod evaluate;
mod session;
mod utterance;
mod word;

pub use evaluate::{GuessRow, LetterResult, LetterState, evaluate_guess};
pub use session::{GameSession, GameStatus, GuessError};
pub use utterance::normalize_utterance;
pub use word::{Word, WordError};

use rand::RngCore;

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board, i.e. guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Supplier of target words and judge of acceptable guesses
pub trait WordSource {
    /// Pick a target word for a new round
    fn pick_target(&self, rng: &mut dyn RngCore) -> Word;

    /// Whether `word` may be played as a guess
    fn is_acceptable(&self, word: &Word) -> bool;
}
