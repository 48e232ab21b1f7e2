//! One-off guess evaluation
//!
//! Evaluates a single guess against a given target without a session or
//! vocabulary check.

use crate::core::{GuessRow, Word, evaluate_guess};
use anyhow::{Context, Result};

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn check_word(guess: &str, target: &str) -> Result<GuessRow> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    Ok(evaluate_guess(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_repeated_letters() {
        let row = check_word("erase", "speed").unwrap();
        assert_eq!(row.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn check_rejects_bad_words() {
        let err = check_word("cranes", "slate").unwrap_err();
        assert!(err.to_string().contains("Invalid guess 'cranes'"));

        let err = check_word("crane", "sl8te").unwrap_err();
        assert!(err.to_string().contains("Invalid target 'sl8te'"));
    }
}
