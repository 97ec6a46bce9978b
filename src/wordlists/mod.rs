//! Word lists for hangman
//!
//! Words come either from a newline-delimited file or from the list embedded
//! at build time.

mod embedded;
pub mod loader;

use crate::core::Word;
use log::info;

pub use embedded::{BUILTIN, BUILTIN_COUNT};
pub use loader::WordListError;

/// Default word list file, looked up in the working directory
pub const DEFAULT_PATH: &str = "wordlist.txt";

/// Source name that selects the embedded list instead of a file
pub const BUILTIN_SOURCE: &str = "builtin";

/// Load the word list named by `source`
///
/// `"builtin"` selects the embedded list; anything else is treated as a path.
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read or yields no words.
pub fn load(source: &str) -> Result<Vec<Word>, WordListError> {
    let words = if source == BUILTIN_SOURCE {
        loader::words_from_slice(BUILTIN)
    } else {
        loader::load_from_file(source)?
    };

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    info!("word list ready: {} words from {source}", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN {
            assert!(
                Word::new(word).is_ok(),
                "Builtin word '{word}' is not a valid hangman word"
            );
        }
    }

    #[test]
    fn load_builtin() {
        let words = load(BUILTIN_SOURCE).unwrap();
        assert_eq!(words.len(), BUILTIN_COUNT);
    }

    #[test]
    fn load_missing_path_fails() {
        let path = std::env::temp_dir().join("hangman_wordlists_missing_file.txt");
        let _ = std::fs::remove_file(&path);
        assert!(load(&path.to_string_lossy()).is_err());
    }
}
