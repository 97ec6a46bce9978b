//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod letter;
mod mask;
mod word;

pub use letter::{GuessError, Letter};
pub use mask::RevealMask;
pub use word::{Word, WordError};
