//! Letter-frequency guessing
//!
//! Narrows the word list to words consistent with the board, then suggests the
//! untried letter that occurs in the most remaining candidates.

use crate::core::{Letter, RevealMask, Word};
use crate::game::Round;
use rayon::prelude::*;

/// Fallback order when no word in the list fits the board
const ENGLISH_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// A suggested next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub letter: Letter,
    /// Candidates still consistent with the board
    pub candidates: usize,
    /// How many of those contain `letter`
    pub coverage: usize,
}

impl Suggestion {
    /// Fraction of candidates the letter would hit, in percent
    #[must_use]
    pub fn hit_chance(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.coverage as f64 / self.candidates as f64 * 100.0
        }
    }
}

/// Check whether `word` could be the secret behind `mask` and `incorrect`
///
/// Revealed positions must match exactly. Hidden positions cannot hold a
/// revealed letter (it would have been uncovered) or a missed letter.
#[must_use]
pub fn is_consistent(word: &Word, mask: &RevealMask, incorrect: &[Letter]) -> bool {
    if word.len() != mask.len() {
        return false;
    }
    if incorrect.iter().any(|l| word.has_letter(l.byte())) {
        return false;
    }
    word.bytes()
        .iter()
        .enumerate()
        .all(|(pos, &b)| match mask.get(pos) {
            Some(revealed) => revealed == b,
            None => !mask.contains(b),
        })
}

/// Frequency-based hangman solver over a fixed word list
pub struct Solver<'a> {
    words: &'a [Word],
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Words from the list still consistent with the round's board
    #[must_use]
    pub fn candidates(&self, round: &Round) -> Vec<&'a Word> {
        self.words
            .par_iter()
            .filter(|w| is_consistent(w, round.mask(), round.incorrect()))
            .collect()
    }

    /// Suggest the next letter to guess
    ///
    /// Returns `None` only when every letter has been tried.
    #[must_use]
    pub fn suggest(&self, round: &Round) -> Option<Suggestion> {
        let mut tried = [false; 26];
        for &b in round.mask().slots() {
            if b.is_ascii_lowercase() {
                tried[usize::from(b - b'a')] = true;
            }
        }
        for l in round.incorrect() {
            tried[usize::from(l.byte() - b'a')] = true;
        }

        let candidates = self.candidates(round);
        let counts = letter_counts(&candidates);

        let best = (0..26u8)
            .filter(|&i| !tried[usize::from(i)] && counts[usize::from(i)] > 0)
            .max_by(|&a, &b| {
                counts[usize::from(a)]
                    .cmp(&counts[usize::from(b)])
                    .then(b.cmp(&a))
            });

        let letter_byte = match best {
            Some(i) => b'a' + i,
            None => *ENGLISH_ORDER
                .iter()
                .find(|&&b| !tried[usize::from(b - b'a')])?,
        };

        Letter::from_byte(letter_byte).map(|letter| Suggestion {
            letter,
            candidates: candidates.len(),
            coverage: counts[usize::from(letter_byte - b'a')],
        })
    }
}

/// Number of candidates containing each letter, counted once per word
fn letter_counts(candidates: &[&Word]) -> [usize; 26] {
    candidates
        .par_iter()
        .fold(
            || [0usize; 26],
            |mut acc, word| {
                for b in word.distinct_letters() {
                    acc[usize::from(b - b'a')] += 1;
                }
                acc
            },
        )
        .reduce(
            || [0usize; 26],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}
