//! Hangman
//!
//! A terminal word-guessing game: a secret word is picked at random from a word
//! list and revealed letter by letter until the player wins or is hanged.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{RoundStatus, Session, seeded_rng};
//! use hangman::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["cat", "dog"]);
//! let mut session = Session::new(&words, seeded_rng(Some(1))).unwrap();
//! session.start_round_at(0);
//!
//! for guess in ["c", "a", "t"] {
//!     session.submit(guess).unwrap();
//! }
//! assert_eq!(session.round().status(), RoundStatus::Won);
//! assert_eq!(session.stats().wins, 1);
//! ```

// Core domain types
pub mod core;

// Rounds, sessions and rules
pub mod game;

// Letter suggestions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
