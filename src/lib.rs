//! Shoutdle
//!
//! A Wordle-style word game that takes typed or spoken guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use shoutdle::core::{GameSession, GameStatus, Word};
//! use shoutdle::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let mut session = GameSession::start(Word::new("crane").unwrap());
//!
//! let row = session.submit_guess("react", &words).unwrap();
//! println!("{row}"); // REACT 🟨🟨🟩🟨⬜
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

// Core game types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Round configuration
pub mod config;

// In-memory game statistics
pub mod stats;

// Diagnostic logging setup
pub mod logging;
