//! Ladder configuration
//!
//! The word length and alphabet are passed explicitly to every component that
//! needs them instead of living in process-wide state.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 4;

/// Errors raised while building a [`LadderConfig`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Word length must be at least 1")]
    ZeroWordLength,

    #[error("Alphabet must contain at least one letter")]
    EmptyAlphabet,

    #[error("Alphabet may only contain ASCII letters, found {0:?}")]
    InvalidLetter(char),
}

/// Ordered set of lowercase ASCII letters used for substitutions
///
/// Letters are stored in the order they were first given, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<u8>,
}

impl Alphabet {
    /// The 26-letter lowercase English alphabet
    #[must_use]
    pub fn english() -> Self {
        Self {
            letters: (b'a'..=b'z').collect(),
        }
    }

    /// Build an alphabet from arbitrary text
    ///
    /// Letters are lowercased and deduplicated.
    ///
    /// # Errors
    /// Returns `ConfigError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("AbCa").unwrap();
    /// assert_eq!(alphabet.letters(), b"abc");
    /// assert!(Alphabet::new("ab1").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, ConfigError> {
        let mut letters = Vec::with_capacity(text.len());

        for c in text.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(ConfigError::InvalidLetter(c));
            }
            let letter = c.to_ascii_lowercase() as u8;
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }

        if letters.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        Ok(Self { letters })
    }

    /// Letters in substitution order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Check if a byte is part of this alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Word length and alphabet for one run
///
/// Built once at startup and shared by reference with the dictionary loader,
/// the neighbor generator and the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderConfig {
    word_length: usize,
    alphabet: Alphabet,
}

impl LadderConfig {
    /// Create a configuration with the English alphabet
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroWordLength` if `word_length` is 0.
    pub fn new(word_length: usize) -> Result<Self, ConfigError> {
        Self::with_alphabet(word_length, Alphabet::english())
    }

    /// Create a configuration with a custom alphabet
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroWordLength` if `word_length` is 0.
    pub fn with_alphabet(word_length: usize, alphabet: Alphabet) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        Ok(Self {
            word_length,
            alphabet,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            alphabet: Alphabet::english(),
        }
    }
}
