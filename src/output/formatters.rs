//! Formatting utilities shared by the terminal front ends

use crate::core::{
    GameSession, GameStatus, GuessError, GuessRow, LetterResult, LetterState, MAX_ATTEMPTS,
    WORD_LENGTH,
};
use colored::{ColoredString, Colorize};

/// Rules shown by the help screens
pub const HELP_LINES: &[&str] = &[
    "Guess the 5-letter word in 6 tries.",
    "Type a guess, or say it: the transcript is cleaned up and submitted.",
    "Green: correct letter in the correct position.",
    "Yellow: letter is in the word but somewhere else.",
    "Gray: letter is not in the word (or all its copies are used up).",
];

/// A single letter tile with its classification colour
#[must_use]
pub fn colored_tile(result: LetterResult) -> ColoredString {
    let text = format!(" {} ", result.letter());
    match result.state() {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black().bold(),
    }
}

/// A whole row of coloured tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.letters()
        .iter()
        .map(|&r| colored_tile(r).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder for a row not played yet
#[must_use]
pub fn blank_row() -> String {
    vec![" _ "; WORD_LENGTH].join(" ")
}

/// "Guess k of 6" while the round is running
#[must_use]
pub fn progress_label(session: &GameSession) -> Option<String> {
    (!session.is_over())
        .then(|| format!("Guess {} of {MAX_ATTEMPTS}", session.attempts_used() + 1))
}

/// User-facing text for a rejected guess
#[must_use]
pub fn rejection_message(error: &GuessError) -> String {
    match error {
        GuessError::WrongLength { expected, .. } => {
            format!("Word must be {expected} letters long")
        }
        GuessError::NotInVocabulary(word) => format!("Not in word list: {word}"),
        GuessError::GameAlreadyOver => "Game is already over. Start a new game!".to_string(),
    }
}

/// Announcement for a finished round
#[must_use]
pub fn outcome_message(session: &GameSession) -> Option<String> {
    match session.status() {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(format!(
            "Correct! You guessed the word: {} ({}/{MAX_ATTEMPTS})",
            session.target(),
            session.attempts_used()
        )),
        GameStatus::Lost => Some(format!("Game over! The word was: {}", session.target())),
    }
}

/// Emoji grid for sharing a finished round
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let score = match session.status() {
        GameStatus::Won => session.attempts_used().to_string(),
        _ => "X".to_string(),
    };

    let mut out = format!("SHOUTDLE {score}/{MAX_ATTEMPTS}");
    for row in session.submitted_rows() {
        out.push('\n');
        out.push_str(&row.to_emoji());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    fn list() -> WordList {
        WordList::from_strs(&["crane", "react", "slate"], &[]).unwrap()
    }

    #[test]
    fn blank_row_has_one_slot_per_letter() {
        assert_eq!(blank_row(), " _   _   _   _   _ ");
    }

    #[test]
    fn progress_counts_from_one() {
        let mut session = GameSession::start(Word::new("crane").unwrap());
        assert_eq!(progress_label(&session).as_deref(), Some("Guess 1 of 6"));

        session.submit_guess("react", &list()).unwrap();
        assert_eq!(progress_label(&session).as_deref(), Some("Guess 2 of 6"));

        session.submit_guess("crane", &list()).unwrap();
        assert_eq!(progress_label(&session), None);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            rejection_message(&GuessError::WrongLength {
                expected: 5,
                actual: 3
            }),
            "Word must be 5 letters long"
        );
        assert_eq!(
            rejection_message(&GuessError::NotInVocabulary("ZZZZZ".into())),
            "Not in word list: ZZZZZ"
        );
    }

    #[test]
    fn outcome_and_share_grid_after_win() {
        let mut session = GameSession::start(Word::new("crane").unwrap());
        assert_eq!(outcome_message(&session), None);

        session.submit_guess("react", &list()).unwrap();
        session.submit_guess("crane", &list()).unwrap();

        assert_eq!(
            outcome_message(&session).as_deref(),
            Some("Correct! You guessed the word: CRANE (2/6)")
        );
        assert_eq!(share_grid(&session), "SHOUTDLE 2/6\n🟨🟨🟩🟨⬜\n🟩🟩🟩🟩🟩");
    }
}
