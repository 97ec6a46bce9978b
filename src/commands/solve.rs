//! Word solving command
//!
//! Lets the solver play a full round against a chosen word and records each guess.

use crate::core::{Letter, Word, WordError};
use crate::game::{Resolution, Round, RoundStatus};
use crate::solver::Solver;

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub misses: usize,
    pub steps: Vec<SolveStep>,
}

/// A single guess in the solution
pub struct SolveStep {
    pub letter: Letter,
    pub resolution: Resolution,
    /// Mask after the guess
    pub mask: String,
    /// Candidates consistent with the board before the guess
    pub candidates: usize,
    pub hit_chance: f64,
}

/// Play `target` with the solver until the round is won or lost
///
/// The target does not need to be in the solver's word list.
///
/// # Errors
///
/// Returns `WordError` if `target` is not a valid hangman word.
pub fn solve_word(target: &str, solver: &Solver<'_>) -> Result<SolveResult, WordError> {
    let word = Word::new(target)?;
    Ok(play_round(&word, solver))
}

/// Play one round on an already validated word
#[must_use]
pub fn play_round(word: &Word, solver: &Solver<'_>) -> SolveResult {
    let mut round = Round::new(0, word.clone());
    let mut steps = Vec::new();

    while round.status() == RoundStatus::InProgress {
        let Some(suggestion) = solver.suggest(&round) else {
            break;
        };
        let Ok(resolution) = round.guess(suggestion.letter) else {
            break;
        };

        steps.push(SolveStep {
            letter: suggestion.letter,
            resolution,
            mask: round.mask().to_string(),
            candidates: suggestion.candidates,
            hit_chance: suggestion.hit_chance(),
        });
    }

    SolveResult {
        target: word.text().to_string(),
        success: round.status() == RoundStatus::Won,
        misses: round.incorrect().len(),
        steps,
    }
}
