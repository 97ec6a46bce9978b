//! Secret word representation
//!
//! A Word stores a lowercase hangman word along with letter position indices so a
//! guess can reveal every occurrence at once.

use rustc_hash::FxHashMap;
use std::fmt;

/// A hangman word with letter position tracking
///
/// The text is normalized to lowercase on construction, so a lowercase guess
/// always matches regardless of how the word list was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Castle").unwrap();
    /// assert_eq!(word.text(), "castle");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, b) in text.bytes().enumerate() {
            letter_positions.entry(b).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a `Word` is never constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the distinct letters of the word
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.letter_positions.keys().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
