//! Neighbor listing command

use crate::core::{Word, WordError};
use crate::dictionary::CandidateSet;
use crate::graph::neighbors;

/// Words one substitution away from a query word
#[derive(Debug)]
pub struct NeighborsResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
}

/// List the dictionary neighbors of a word
///
/// The word itself does not have to be in the dictionary, but it must have the
/// configured length and letters.
///
/// # Errors
///
/// Returns `WordError` if the word is invalid for the candidate set's
/// configuration.
pub fn list_neighbors(word: &str, candidates: &CandidateSet) -> Result<NeighborsResult, WordError> {
    let word = Word::new(word.trim(), candidates.config())?;

    Ok(NeighborsResult {
        in_dictionary: candidates.contains(word.text()),
        neighbors: neighbors(word.text(), candidates)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect(),
        word: word.text().to_string(),
    })
}
