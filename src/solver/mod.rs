//! Hangman solving
//!
//! Letter suggestions from word-list frequency, used by the `solve` and
//! `benchmark` commands and the TUI hint.

pub mod frequency;

pub use frequency::{Solver, Suggestion, is_consistent};
