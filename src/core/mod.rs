//! Core domain types for word ladders
//!
//! This module contains the fundamental value types shared by every other
//! module: validated words and the configuration that defines which words are
//! valid.

mod config;
mod word;

pub use config::{Alphabet, ConfigError, DEFAULT_WORD_LENGTH, LadderConfig};
pub use word::{Word, WordError};
