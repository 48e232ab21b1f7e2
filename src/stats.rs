//! Per-process game statistics
//!
//! Nothing is persisted; numbers reset when the program exits.

use crate::core::{GameSession, GameStatus, MAX_ATTEMPTS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts rounds won on guess `n`; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Count a finished round. Rounds still in progress are ignored.
    pub fn record(&mut self, session: &GameSession) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[session.attempts_used()] += 1;
            }
            GameStatus::Lost => self.total_games += 1,
        }
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    fn list() -> WordList {
        WordList::from_strs(&["crane", "slate", "fight", "plumb", "dowdy", "jumpy", "sweet"], &[])
            .unwrap()
    }

    #[test]
    fn in_progress_round_is_not_counted() {
        let mut stats = Statistics::default();
        let mut session = GameSession::start(Word::new("crane").unwrap());
        session.submit_guess("slate", &list()).unwrap();

        stats.record(&session);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_and_losses_are_counted() {
        let mut stats = Statistics::default();

        let mut won = GameSession::start(Word::new("crane").unwrap());
        won.submit_guess("slate", &list()).unwrap();
        won.submit_guess("crane", &list()).unwrap();
        stats.record(&won);

        let mut lost = GameSession::start(Word::new("crane").unwrap());
        for guess in ["fight", "plumb", "dowdy", "jumpy", "sweet", "slate"] {
            lost.submit_guess(guess, &list()).unwrap();
        }
        stats.record(&lost);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_win_rate_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
