//! Per-position reveal state of the secret word

use super::{Letter, Word};
use std::fmt;

/// One slot per letter of the secret word: either the revealed letter or a
/// placeholder.
///
/// The mask length always equals the length of the word it was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    slots: Vec<u8>,
}

impl RevealMask {
    /// Placeholder shown for letters not yet guessed
    pub const PLACEHOLDER: u8 = b'_';

    /// Create an all-hidden mask for `word`
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            slots: vec![Self::PLACEHOLDER; word.len()],
        }
    }

    /// Reveal every position of `word` holding `letter`
    ///
    /// Returns how many positions were newly revealed. Guessing an already
    /// revealed letter returns 0.
    pub fn reveal(&mut self, word: &Word, letter: Letter) -> usize {
        let mut newly_revealed = 0;
        for &pos in word.positions_of(letter.byte()) {
            if self.slots[pos] == Self::PLACEHOLDER {
                self.slots[pos] = letter.byte();
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    /// True once no placeholder remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&Self::PLACEHOLDER)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|&&b| b == Self::PLACEHOLDER)
            .count()
    }

    /// Revealed letter at `position`, or `None` if still hidden
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots
            .get(position)
            .copied()
            .filter(|&b| b != Self::PLACEHOLDER)
    }

    /// Check whether `letter` has been revealed anywhere
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter != Self::PLACEHOLDER && self.slots.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw slots, placeholders included
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[u8] {
        &self.slots
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.slots {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: u8) -> Letter {
        Letter::from_byte(c).unwrap()
    }

    #[test]
    fn hidden_mask_matches_word_length() {
        for text in ["cat", "banana", "umbrella", "a"] {
            let word = Word::new(text).unwrap();
            let mask = RevealMask::hidden(&word);
            assert_eq!(mask.len(), word.len());
            assert_eq!(mask.hidden_count(), word.len());
            assert!(!mask.is_complete());
        }
    }

    #[test]
    fn reveal_all_occurrences_at_once() {
        let word = Word::new("banana").unwrap();
        let mut mask = RevealMask::hidden(&word);

        assert_eq!(mask.reveal(&word, letter(b'a')), 3);
        assert_eq!(mask.to_string(), "_a_a_a");
        assert_eq!(mask.hidden_count(), 3);
    }

    #[test]
    fn reveal_missing_letter_is_noop() {
        let word = Word::new("cat").unwrap();
        let mut mask = RevealMask::hidden(&word);

        assert_eq!(mask.reveal(&word, letter(b'z')), 0);
        assert_eq!(mask.to_string(), "___");
    }

    #[test]
    fn reveal_twice_counts_once() {
        let word = Word::new("cat").unwrap();
        let mut mask = RevealMask::hidden(&word);

        assert_eq!(mask.reveal(&word, letter(b'c')), 1);
        assert_eq!(mask.reveal(&word, letter(b'c')), 0);
        assert_eq!(mask.to_string(), "c__");
    }

    #[test]
    fn complete_after_all_letters() {
        let word = Word::new("cat").unwrap();
        let mut mask = RevealMask::hidden(&word);
        for c in [b'c', b'a', b't'] {
            mask.reveal(&word, letter(c));
        }
        assert!(mask.is_complete());
        assert_eq!(mask.to_string(), "cat");
    }

    #[test]
    fn get_and_contains() {
        let word = Word::new("dog").unwrap();
        let mut mask = RevealMask::hidden(&word);
        mask.reveal(&word, letter(b'o'));

        assert_eq!(mask.get(0), None);
        assert_eq!(mask.get(1), Some(b'o'));
        assert_eq!(mask.get(9), None);
        assert!(mask.contains(b'o'));
        assert!(!mask.contains(b'd'));
        assert!(!mask.contains(RevealMask::PLACEHOLDER));
    }
}
