//! Word list loading utilities
//!
//! Provides functions to load candidate sets from files or from the embedded
//! corpus.

use super::candidates::CandidateSet;
use super::embedded::CORPUS;
use crate::core::LadderConfig;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// The corpus compiled into the binary
    #[default]
    BuiltIn,
    /// A plain-text file with one word per line
    File(PathBuf),
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "built-in corpus"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the candidate set from the given source
///
/// # Errors
///
/// Returns `DictionaryError` if a file source cannot be read.
pub fn load_words(
    config: &LadderConfig,
    source: &DictionarySource,
) -> Result<CandidateSet, DictionaryError> {
    match source {
        DictionarySource::BuiltIn => Ok(candidates_from_slice(config, CORPUS)),
        DictionarySource::File(path) => load_from_file(config, path),
    }
}

/// Load words from a file
///
/// Each line holds one word. Lines are trimmed and lowercased; blank lines,
/// lines that are not valid UTF-8, and entries of the wrong length or with
/// letters outside the alphabet are skipped without error.
///
/// # Errors
///
/// Returns `DictionaryError::Read` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_ladder::core::LadderConfig;
/// use word_ladder::dictionary::loader::load_from_file;
///
/// let config = LadderConfig::new(4).unwrap();
/// let words = load_from_file(&config, "/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    config: &LadderConfig,
    path: P,
) -> Result<CandidateSet, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let set = collect_candidates(config, content.split(|&byte| byte == b'\n'));
    debug!(
        path = %path.display(),
        words = set.len(),
        "loaded dictionary file"
    );
    Ok(set)
}

/// Convert an embedded string slice to a candidate set
///
/// # Examples
/// ```
/// use word_ladder::core::LadderConfig;
/// use word_ladder::dictionary::loader::candidates_from_slice;
///
/// let config = LadderConfig::new(3).unwrap();
/// let set = candidates_from_slice(&config, &["cat", "cot", "coat"]);
/// assert_eq!(set.len(), 2);
/// ```
#[must_use]
pub fn candidates_from_slice(config: &LadderConfig, slice: &[&str]) -> CandidateSet {
    collect_candidates(config, slice.iter().map(|word| word.as_bytes()))
}

fn collect_candidates<'a>(
    config: &LadderConfig,
    lines: impl Iterator<Item = &'a [u8]>,
) -> CandidateSet {
    let mut set = CandidateSet::new(config.clone());
    let mut skipped = 0usize;

    for raw in lines {
        let Ok(line) = std::str::from_utf8(raw) else {
            skipped += 1;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if set.insert(line).is_err() {
            skipped += 1;
        }
    }

    debug!(
        word_length = config.word_length(),
        kept = set.len(),
        skipped,
        "built candidate set"
    );
    set
}
