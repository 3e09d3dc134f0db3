//! Terminal output formatting
//!
//! Display utilities for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_knowledge, print_round, print_scores,
    print_simulation_result,
};
