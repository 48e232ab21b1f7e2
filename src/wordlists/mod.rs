//! Word lists for Shoutdle
//!
//! Embedded lists compiled into the binary, plus the [`WordList`] word
//! source used by the game sessions.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::{Word, WordSource};
use loader::{load_from_file, words_from_slice};
use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Error type for building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list has no answer words")]
    NoAnswers,
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Target words plus the vocabulary accepted as guesses
///
/// The accepted vocabulary always contains every answer.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from answers and additional accepted guesses
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let mut accepted: FxHashSet<Word> = allowed.into_iter().collect();
        accepted.extend(answers.iter().cloned());

        debug!(
            answers = answers.len(),
            accepted = accepted.len(),
            "word list ready"
        );
        Ok(Self { answers, accepted })
    }

    /// Build a list from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if no valid answer remains.
    pub fn from_strs(answers: &[&str], allowed: &[&str]) -> Result<Self, WordListError> {
        Self::new(words_from_slice(answers), words_from_slice(allowed))
    }

    /// Embedded answers as targets, embedded answers and extras as vocabulary
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_strs(ANSWERS, ALLOWED)
    }

    /// Embedded answers for both targets and vocabulary
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if the embedded answer list is empty.
    pub fn answers_only() -> Result<Self, WordListError> {
        Self::from_strs(ANSWERS, &[])
    }

    /// Embedded answers as targets, words from `path` as extra vocabulary
    ///
    /// # Errors
    /// Returns `WordListError::Io` if the file cannot be read.
    pub fn with_vocabulary_file(path: impl Into<PathBuf>) -> Result<Self, WordListError> {
        let path = path.into();
        let custom = load_from_file(&path).map_err(|source| WordListError::Io {
            path: path.clone(),
            source,
        })?;
        Self::new(words_from_slice(ANSWERS), custom)
    }

    /// Resolve a `-w` style selector: `all`, `answers`, or a file path
    ///
    /// # Errors
    /// Propagates errors from the selected constructor.
    pub fn from_selector(selector: &str) -> Result<Self, WordListError> {
        match selector {
            "all" => Self::embedded(),
            "answers" => Self::answers_only(),
            path => Self::with_vocabulary_file(path),
        }
    }

    /// Words that can be picked as targets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.accepted.len()
    }
}

impl WordSource for WordList {
    fn pick_target(&self, rng: &mut dyn RngCore) -> Word {
        // `answers` is never empty, see `WordList::new`
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn is_acceptable(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_do_not_overlap() {
        let answers: FxHashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is in both lists");
        }
    }

    #[test]
    fn embedded_list_accepts_answers_and_extras() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.answers().len(), ANSWERS_COUNT);
        assert_eq!(list.vocabulary_len(), ANSWERS_COUNT + ALLOWED_COUNT);

        assert!(list.is_acceptable(&Word::new("crane").unwrap()));
        assert!(list.is_acceptable(&Word::new("erase").unwrap()));
        assert!(!list.is_acceptable(&Word::new("qxzvj").unwrap()));
    }

    #[test]
    fn answers_only_rejects_extras() {
        let list = WordList::answers_only().unwrap();
        assert!(list.is_acceptable(&Word::new("crane").unwrap()));
        assert!(!list.is_acceptable(&Word::new("erase").unwrap()));
    }

    #[test]
    fn empty_answers_is_an_error() {
        assert!(matches!(
            WordList::from_strs(&[], &["crane"]),
            Err(WordListError::NoAnswers)
        ));
        assert!(matches!(
            WordList::from_strs(&["bad"], &[]),
            Err(WordListError::NoAnswers)
        ));
    }

    #[test]
    fn vocabulary_always_contains_answers() {
        let list = WordList::from_strs(&["crane"], &["slate"]).unwrap();
        assert!(list.is_acceptable(&Word::new("crane").unwrap()));
        assert!(list.is_acceptable(&Word::new("slate").unwrap()));
        assert_eq!(list.vocabulary_len(), 2);
    }

    #[test]
    fn pick_target_comes_from_answers() {
        let list = WordList::from_strs(&["crane", "slate", "trace"], &["erase"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = list.pick_target(&mut rng);
            assert!(list.answers().contains(&target));
        }
    }

    #[test]
    fn pick_target_is_reproducible_with_seed() {
        let list = WordList::embedded().unwrap();
        let first = list.pick_target(&mut StdRng::seed_from_u64(42));
        let second = list.pick_target(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn selector_reads_custom_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qajaq").unwrap();

        let list = WordList::from_selector(file.path().to_str().unwrap()).unwrap();
        assert!(list.is_acceptable(&Word::new("qajaq").unwrap()));
        assert!(list.is_acceptable(&Word::new("crane").unwrap()));
        assert!(!list.is_acceptable(&Word::new("erase").unwrap()));

        assert!(matches!(
            WordList::from_selector("/definitely/not/here.txt"),
            Err(WordListError::Io { .. })
        ));
    }
}
