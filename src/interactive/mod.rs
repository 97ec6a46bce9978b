//! Interactive TUI interface
//!
//! Full-screen hangman built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
