//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when no usable word list can be produced
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The source held no valid words
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list '{}': {source}", path.display())
            }
            Self::Empty => write!(f, "word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Load words from a file
///
/// Accepts both `\n` and `\r\n` line endings. Blank lines are skipped and
/// entries that are not purely alphabetic, including lines that are not valid
/// UTF-8, are dropped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read, and
/// `WordListError::Empty` if it contains no valid words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Non-UTF-8 lines decode with replacement characters and are skipped.
    let words = parse_words(&String::from_utf8_lossy(&bytes))?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited word list text
///
/// # Errors
///
/// Returns `WordListError::Empty` if no line holds a valid word.
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    let words: Vec<Word> = content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping word list line {}: {trimmed:?} ({e})", idx + 1);
                    None
                }
            }
        })
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
