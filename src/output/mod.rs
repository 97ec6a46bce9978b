//! Terminal output formatting
//!
//! Board rendering for the console game and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_benchmark_result, print_board, print_farewell, print_guess_error,
    print_round_over, print_solve_result, print_turn,
};
