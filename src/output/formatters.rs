//! Formatting utilities for terminal output

use crate::core::{Letter, RevealMask};
use crate::game::MAX_MISSES;

/// Gallows drawings, one per number of misses
const GALLOWS: [[&str; 6]; MAX_MISSES + 2] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========"],
];

/// Incorrect letters, space-separated in the order they were guessed
#[must_use]
pub fn incorrect_letters(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(Letter::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mask with a space between slots, for wide displays
#[must_use]
pub fn spaced_mask(mask: &RevealMask) -> String {
    mask.slots()
        .iter()
        .map(|&b| (b as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gallows drawing for `misses` wrong guesses (clamped to the final stage)
#[must_use]
pub fn gallows(misses: usize) -> &'static [&'static str] {
    &GALLOWS[misses.min(GALLOWS.len() - 1)]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
