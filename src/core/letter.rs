//! Validated letter guesses

use std::fmt;

/// A single lowercase ASCII letter guessed by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Reasons a guess is rejected without touching the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Empty input, or input that does not start with an ASCII letter
    NotAlphabetic,
    /// More than one character was entered
    NotSingleLetter,
    /// The letter is already in the incorrect-letter list
    AlreadyGuessed(Letter),
    /// The round is already won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic => write!(f, "Please only use alphabetic characters."),
            Self::NotSingleLetter => write!(f, "Please guess a single letter."),
            Self::AlreadyGuessed(_) => write!(f, "You already guessed that letter!"),
            Self::RoundOver => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for GuessError {}

impl Letter {
    /// Build a letter from any ASCII letter byte, normalizing to lowercase
    ///
    /// Returns `None` for anything that is not `a-z` or `A-Z`.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Parse one line of player input
    ///
    /// Surrounding whitespace and the line ending are ignored. The remainder must
    /// be exactly one ASCII letter.
    ///
    /// # Errors
    /// - `GuessError::NotAlphabetic` if the line is empty or starts with a non-letter
    /// - `GuessError::NotSingleLetter` if a letter is followed by more characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessError, Letter};
    ///
    /// assert_eq!(Letter::parse("Q\r\n").unwrap().as_char(), 'q');
    /// assert_eq!(Letter::parse("1"), Err(GuessError::NotAlphabetic));
    /// assert_eq!(Letter::parse("ab"), Err(GuessError::NotSingleLetter));
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let mut chars = input.trim().chars();

        let first = chars.next().ok_or(GuessError::NotAlphabetic)?;
        let letter = u8::try_from(first)
            .ok()
            .and_then(Self::from_byte)
            .ok_or(GuessError::NotAlphabetic)?;

        if chars.next().is_some() {
            return Err(GuessError::NotSingleLetter);
        }

        Ok(letter)
    }

    /// The letter as a lowercase byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The letter as a lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
