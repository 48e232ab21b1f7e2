//! Display functions for the line-based front ends

use super::formatters::{HELP_LINES, blank_row, colored_row, outcome_message, share_grid};
use crate::core::{GameSession, GameStatus, GuessRow, MAX_ATTEMPTS};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the whole board, played rows first, then blanks
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows() {
        match row {
            Some(row) => println!("    {}", colored_row(row)),
            None => println!("    {}", blank_row().bright_black()),
        }
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_outcome(session: &GameSession) {
    let Some(message) = outcome_message(session) else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("  {}", message.bright_green().bold()),
        _ => println!("  {}", message.bright_red().bold()),
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", share_grid(session));
}

/// Print a one-off evaluation
pub fn print_check_result(row: &GuessRow, target: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Target: {}", target.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}\n", colored_row(row), row.to_emoji());
}

pub fn print_help() {
    println!("\n{}", "How to play SHOUTDLE".bright_cyan().bold());
    for line in HELP_LINES {
        println!("  • {line}");
    }
    println!();
    println!("Commands: 'new' for a new game, 'say <phrase>' to submit a transcript,");
    println!("          'stats' for statistics, 'help' for this text, 'quit' to exit\n");
}

pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let width = count * 30 / max;
        println!(
            "   {guesses}: {}{} {count}",
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        );
    }
    println!();
}
