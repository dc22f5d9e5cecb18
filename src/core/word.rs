//! Word representation
//!
//! A Word is a lowercase string whose length and letters have been checked
//! against a [`LadderConfig`].

use super::config::LadderConfig;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// A validated, lowercase dictionary word
///
/// Words hash and compare exactly like their text, so sets and maps keyed by
/// `Word` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Word contains {0:?}, which is not in the alphabet")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly the configured word length
    /// - Contains a character outside the configured alphabet
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{LadderConfig, Word};
    ///
    /// let config = LadderConfig::new(4).unwrap();
    /// let word = Word::new("Cold", &config).unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("colder", &config).is_err());
    /// assert!(Word::new("c0ld", &config).is_err());
    /// ```
    pub fn new(text: &str, config: &LadderConfig) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        // Count chars, not bytes, so multi-byte input reports a sensible length
        let actual = text.chars().count();
        if actual != config.word_length() {
            return Err(WordError::InvalidLength {
                expected: config.word_length(),
                actual,
            });
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !c.is_ascii() || !config.alphabet().contains(c as u8))
        {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the word as bytes (always ASCII)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count the positions where two words differ
    ///
    /// Returns `None` when the words have different lengths.
    #[must_use]
    pub fn distance(&self, other: &str) -> Option<usize> {
        if self.0.len() != other.len() {
            return None;
        }
        Some(
            self.as_bytes()
                .iter()
                .zip(other.as_bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn config(length: usize) -> LadderConfig {
        LadderConfig::new(length).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cold", &config(4)).unwrap();
        assert_eq!(word.text(), "cold");
        assert_eq!(word.as_bytes(), b"cold");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("WARM", &config(4)).unwrap();
        assert_eq!(word.text(), "warm");

        let word2 = Word::new("WaRm", &config(4)).unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("colder", &config(4)),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 6
            })
        );
        assert_eq!(
            Word::new("", &config(3)),
            Err(WordError::InvalidLength {
                expected: 3,
                actual: 0
            })
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c0ld", &config(4)).is_err()); // Number
        assert!(Word::new("co d", &config(4)).is_err()); // Space
        assert!(Word::new("don't", &config(5)).is_err()); // Apostrophe
        assert!(Word::new("café", &config(4)).is_err()); // Non-ASCII
    }

    #[test]
    fn word_respects_custom_alphabet() {
        let config = LadderConfig::with_alphabet(3, Alphabet::new("abc").unwrap()).unwrap();
        assert!(Word::new("cab", &config).is_ok());
        assert_eq!(
            Word::new("cat", &config),
            Err(WordError::InvalidCharacter('t'))
        );
    }

    #[test]
    fn word_distance() {
        let word = Word::new("cold", &config(4)).unwrap();
        assert_eq!(word.distance("cold"), Some(0));
        assert_eq!(word.distance("cord"), Some(1));
        assert_eq!(word.distance("warm"), Some(4));
        assert_eq!(word.distance("colder"), None);
    }

    #[test]
    fn word_borrows_as_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(Word::new("cold", &config(4)).unwrap());
        assert!(set.contains("cold"));
        assert!(!set.contains("warm"));
    }

    #[test]
    fn word_error_messages() {
        let err = Word::new("colder", &config(4)).unwrap_err();
        assert_eq!(err.to_string(), "Word must be exactly 4 letters, got 6");

        let err = Word::new("c0ld", &config(4)).unwrap_err();
        assert_eq!(err.to_string(), "Word contains '0', which is not in the alphabet");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn word_display() {
        let word = Word::new("cold", &config(4)).unwrap();
        assert_eq!(format!("{word}"), "cold");
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let a = Word::new("card", &config(4)).unwrap();
        let b = Word::new("cold", &config(4)).unwrap();
        assert!(a < b);
    }
}
