//! Round configuration: where targets come from
//!
//! Targets are drawn from the word list with a seedable RNG, or pinned to a
//! single word with `--target`.

use crate::core::{Word, WordError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid target word '{input}': {source}")]
    InvalidTarget {
        input: String,
        #[source]
        source: WordError,
    },
    #[error("target word '{0}' is not in the word list")]
    TargetNotAccepted(String),
}

/// Options that shape every round
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Seed for reproducible target selection
    pub seed: Option<u64>,
    /// Fixed target for every round
    pub target: Option<String>,
}

impl GameConfig {
    /// Build the picker for this configuration
    ///
    /// # Errors
    /// Fails if a fixed target is not a valid word or cannot be guessed with
    /// the given word list.
    pub fn target_picker<S: WordSource + ?Sized>(
        &self,
        words: &S,
    ) -> Result<TargetPicker, ConfigError> {
        let fixed = self
            .target
            .as_deref()
            .map(|input| {
                let word = Word::new(input).map_err(|source| ConfigError::InvalidTarget {
                    input: input.to_string(),
                    source,
                })?;
                if words.is_acceptable(&word) {
                    Ok(word)
                } else {
                    Err(ConfigError::TargetNotAccepted(word.text().to_string()))
                }
            })
            .transpose()?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(TargetPicker { rng, fixed })
    }
}

/// Hands out the target for each new round
#[derive(Debug)]
pub struct TargetPicker {
    rng: StdRng,
    fixed: Option<Word>,
}

impl TargetPicker {
    pub fn next_target<S: WordSource + ?Sized>(&mut self, words: &S) -> Word {
        let target = match &self.fixed {
            Some(word) => word.clone(),
            None => words.pick_target(&mut self.rng),
        };
        debug!(fixed = self.fixed.is_some(), "picked target");
        target
    }
}
