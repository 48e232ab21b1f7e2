//! Shoutdle - CLI
//!
//! Word guessing game with a TUI, a line-based mode and a one-shot checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shoutdle::{
    commands::{check_word, run_simple},
    config::{GameConfig, TargetPicker},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_check_result,
    wordlists::WordList,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "shoutdle",
    about = "Guess the 5-letter word in 6 tries, by typing or by voice transcript",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (targets only), or path to an extra vocabulary file
    #[arg(short = 'w', long, global = true, default_value = "all", env = "SHOUTDLE_WORDLIST")]
    wordlist: String,

    /// Seed for reproducible target words
    #[arg(long, global = true, env = "SHOUTDLE_SEED")]
    seed: Option<u64>,

    /// Play every round against this word
    #[arg(long, global = true)]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Evaluate one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&log_target(cli.command.as_ref()));

    let config = GameConfig {
        seed: cli.seed,
        target: cli.target,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let (words, picker) = load_game(&cli.wordlist, &config)?;
            run_tui(App::new(&words, picker))
        }
        Commands::Simple => {
            let (words, mut picker) = load_game(&cli.wordlist, &config)?;
            run_simple(&words, &mut picker)
        }
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

/// The TUI owns the terminal, so its log goes to a file
fn log_target(command: Option<&Commands>) -> LogTarget {
    match command {
        None | Some(Commands::Play) => LogTarget::tui_default(),
        Some(_) => LogTarget::Stderr,
    }
}

/// Load the word list selected with -w and prepare target selection
fn load_game(wordlist: &str, config: &GameConfig) -> Result<(WordList, TargetPicker)> {
    let words = WordList::from_selector(wordlist)
        .with_context(|| format!("Failed to load word list '{wordlist}'"))?;
    info!(
        answers = words.answers().len(),
        vocabulary = words.vocabulary_len(),
        "word list loaded"
    );

    let picker = config.target_picker(&words)?;
    Ok((words, picker))
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let row = check_word(guess, target)?;
    print_check_result(&row, &target.trim().to_uppercase());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tui_logs_to_file() {
        assert_eq!(log_target(None), LogTarget::tui_default());
        assert_eq!(log_target(Some(&Commands::Play)), LogTarget::tui_default());
        assert_eq!(log_target(Some(&Commands::Simple)), LogTarget::Stderr);
    }
}
