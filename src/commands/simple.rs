//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is either a command or a
//! guess; `say <phrase>` feeds the phrase through the transcript path.

use crate::config::TargetPicker;
use crate::core::{GameSession, WORD_LENGTH, WordSource, normalize_utterance};
use crate::output::formatters::{progress_label, rejection_message};
use crate::output::{print_board, print_help, print_outcome, print_statistics};
use crate::stats::Statistics;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Help,
    Stats,
    /// Spoken guess: raw transcript text
    Say(String),
    /// Typed guess
    Guess(String),
    Empty,
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let lower = line.to_lowercase();

        match lower.as_str() {
            "" => Self::Empty,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "help" | "h" | "?" => Self::Help,
            "stats" => Self::Stats,
            _ if lower.starts_with("say ") => {
                let phrase = line.split_once(' ').map_or("", |(_, rest)| rest);
                Self::Say(phrase.trim().to_string())
            }
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSource + ?Sized>(words: &S, picker: &mut TargetPicker) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   SHOUTDLE - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_help();

    let mut session = GameSession::start(picker.next_target(words));
    let mut stats = Statistics::default();

    loop {
        let prompt = progress_label(&session).unwrap_or_else(|| "Command".to_string());
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let guess = match Command::parse(&input) {
            Command::Empty => continue,
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                session.reset(picker.next_target(words));
                println!("\n🔄 New game started!\n");
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Stats => {
                print_statistics(&stats);
                continue;
            }
            Command::Say(phrase) => {
                if let Some(word) = normalize_utterance(&phrase) {
                    println!("🎤 Heard: {}", word.bright_white().bold());
                    word
                } else {
                    println!("🎤 Didn't catch a {WORD_LENGTH}-letter word in \"{phrase}\"\n");
                    continue;
                }
            }
            Command::Guess(word) => word,
        };

        if let Some(e) = session.submit_guess(&guess, words).err() {
            println!("❌ {}\n", rejection_message(&e));
            continue;
        }
        print_board(&session);

        if session.is_over() {
            stats.record(&session);
            print_outcome(&session);

            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session.reset(picker.next_target(words));
                println!("\n🔄 New game started!\n");
            } else {
                print_statistics(&stats);
                println!("👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
