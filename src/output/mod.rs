//! Terminal output formatting
//!
//! Display utilities for the line-based front ends and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_help, print_outcome, print_statistics};
