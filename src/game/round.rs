//! A single round: one secret word, played to a win or a loss

use crate::core::{GuessError, Letter, RevealMask, Word};

/// Wrong guesses allowed; the next one loses the round
pub const MAX_MISSES: usize = 5;

/// Where a round stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Effect of an accepted guess on the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The letter occurs in the word; `revealed` positions were newly uncovered
    Hit { revealed: usize },
    /// The letter is not in the word and was added to the incorrect list
    Miss,
}

/// Per-round game state
///
/// The mask always has the secret word's length, the incorrect list never holds
/// duplicates, and the status can only leave `InProgress` once.
#[derive(Debug, Clone)]
pub struct Round {
    word_index: usize,
    word: Word,
    mask: RevealMask,
    incorrect: Vec<Letter>,
    status: RoundStatus,
}

impl Round {
    /// Start a round on `word`, found at `word_index` in the word list
    #[must_use]
    pub fn new(word_index: usize, word: Word) -> Self {
        let mask = RevealMask::hidden(&word);
        Self {
            word_index,
            word,
            mask,
            incorrect: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Apply a validated letter and re-evaluate the round
    ///
    /// # Errors
    /// - `GuessError::RoundOver` once the round is won or lost
    /// - `GuessError::AlreadyGuessed` if the letter was already a miss
    ///
    /// Neither error changes any state.
    pub fn guess(&mut self, letter: Letter) -> Result<Resolution, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::RoundOver);
        }
        let resolution = self.resolve(letter)?;
        self.evaluate();
        Ok(resolution)
    }

    fn resolve(&mut self, letter: Letter) -> Result<Resolution, GuessError> {
        if self.incorrect.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        if self.word.has_letter(letter.byte()) {
            let revealed = self.mask.reveal(&self.word, letter);
            Ok(Resolution::Hit { revealed })
        } else {
            self.incorrect.push(letter);
            Ok(Resolution::Miss)
        }
    }

    // Loss is checked before win.
    fn evaluate(&mut self) {
        if self.incorrect.len() > MAX_MISSES {
            self.status = RoundStatus::Lost;
        } else if self.mask.is_complete() {
            self.status = RoundStatus::Won;
        }
    }

    #[must_use]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    /// Incorrect letters in the order they were guessed
    #[must_use]
    pub fn incorrect(&self) -> &[Letter] {
        &self.incorrect
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub fn misses_remaining(&self) -> usize {
        (MAX_MISSES + 1).saturating_sub(self.incorrect.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_byte(c as u8).unwrap()
    }

    fn round(text: &str) -> Round {
        Round::new(0, Word::new(text).unwrap())
    }

    #[test]
    fn new_round_is_hidden_and_in_progress() {
        let r = round("cat");
        assert_eq!(r.mask().to_string(), "___");
        assert!(r.incorrect().is_empty());
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.misses_remaining(), 6);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut r = round("banana");
        assert_eq!(r.guess(letter('n')), Ok(Resolution::Hit { revealed: 2 }));
        assert_eq!(r.mask().to_string(), "__n_n_");
        assert!(r.incorrect().is_empty());
    }

    #[test]
    fn miss_adds_letter_and_keeps_mask() {
        let mut r = round("cat");
        let before = r.mask().clone();
        assert_eq!(r.guess(letter('z')), Ok(Resolution::Miss));
        assert_eq!(r.incorrect(), &[letter('z')]);
        assert_eq!(r.mask(), &before);
    }

    #[test]
    fn repeated_miss_rejected_without_change() {
        let mut r = round("cat");
        r.guess(letter('z')).unwrap();
        assert_eq!(
            r.guess(letter('z')),
            Err(GuessError::AlreadyGuessed(letter('z')))
        );
        assert_eq!(r.incorrect().len(), 1);
    }

    #[test]
    fn repeated_hit_is_harmless() {
        let mut r = round("cat");
        r.guess(letter('c')).unwrap();
        assert_eq!(r.guess(letter('c')), Ok(Resolution::Hit { revealed: 0 }));
        assert_eq!(r.mask().to_string(), "c__");
        assert!(r.incorrect().is_empty());
    }

    #[test]
    fn scenario_win_cat() {
        let mut r = round("cat");
        for c in ['z', 'q', 'x'] {
            r.guess(letter(c)).unwrap();
        }
        assert_eq!(r.incorrect().len(), 3);
        assert_eq!(r.mask().to_string(), "___");

        r.guess(letter('c')).unwrap();
        assert_eq!(r.mask().to_string(), "c__");
        r.guess(letter('a')).unwrap();
        assert_eq!(r.mask().to_string(), "ca_");
        assert_eq!(r.status(), RoundStatus::InProgress);
        r.guess(letter('t')).unwrap();
        assert_eq!(r.mask().to_string(), "cat");
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn loss_exactly_on_sixth_miss() {
        let mut r = round("cat");
        for (i, c) in ['z', 'q', 'x', 'b', 'f'].into_iter().enumerate() {
            r.guess(letter(c)).unwrap();
            assert_eq!(r.incorrect().len(), i + 1);
            assert_eq!(r.status(), RoundStatus::InProgress);
        }
        assert_eq!(r.misses_remaining(), 1);

        r.guess(letter('g')).unwrap();
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.misses_remaining(), 0);
    }

    #[test]
    fn guesses_rejected_after_round_over() {
        let mut r = round("a");
        r.guess(letter('a')).unwrap();
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.guess(letter('b')), Err(GuessError::RoundOver));
        assert!(r.incorrect().is_empty());
    }

    #[test]
    fn five_misses_then_win_is_won() {
        let mut r = round("cat");
        for c in ['z', 'q', 'x', 'b', 'f', 'c', 'a'] {
            r.guess(letter(c)).unwrap();
        }
        assert_eq!(r.status(), RoundStatus::InProgress);
        r.guess(letter('t')).unwrap();
        assert_eq!(r.status(), RoundStatus::Won);
    }
}
