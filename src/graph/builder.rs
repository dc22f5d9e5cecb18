//! Two-phase graph construction
//!
//! Phase 1 computes each word's neighbor list as plain words. Phase 2 resolves
//! those words to vertex ids once every vertex exists.

use super::arena::Graph;
use super::neighbors::neighbors;
use super::vertex::{Vertex, VertexId};
use crate::core::Word;
use crate::dictionary::CandidateSet;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Build a graph over the candidate set with default settings
///
/// # Examples
/// ```
/// use word_ladder::core::LadderConfig;
/// use word_ladder::dictionary::CandidateSet;
/// use word_ladder::graph::build;
///
/// let config = LadderConfig::new(3).unwrap();
/// let set = CandidateSet::from_words(config, ["cat", "cot", "cog", "dog", "dot"]);
///
/// let graph = build(&set);
/// assert_eq!(graph.len(), 5);
/// assert_eq!(graph.edge_count(), 5);
/// ```
#[must_use]
pub fn build(candidates: &CandidateSet) -> Graph {
    GraphBuilder::new().build(candidates)
}

/// Configurable graph construction
///
/// Phase 1 runs on the rayon pool unless disabled; its output is fully
/// collected before Phase 2 starts.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    parallel: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self { parallel: true }
    }

    /// Enable or disable the parallel neighbor phase
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the graph
    ///
    /// The candidate set is borrowed for the whole build, so both phases see
    /// the same snapshot. An empty set produces an empty graph.
    #[must_use]
    pub fn build(&self, candidates: &CandidateSet) -> Graph {
        let start = Instant::now();
        let words = candidates.sorted();

        // Phase 1: neighbor lists as words
        let pending: Vec<Vec<&Word>> = if self.parallel {
            words
                .par_iter()
                .map(|word| pending_neighbors(word, candidates))
                .collect()
        } else {
            words
                .iter()
                .map(|word| pending_neighbors(word, candidates))
                .collect()
        };
        debug!(
            vertices = words.len(),
            parallel = self.parallel,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "computed neighbor lists"
        );

        // Phase 2: resolve words to ids
        let index: FxHashMap<Word, VertexId> = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word.clone(), VertexId::new(i)))
            .collect();

        let vertices: Vec<Vertex> = words
            .iter()
            .zip(pending)
            .map(|(&word, names)| {
                let mut ids: Vec<VertexId> = names
                    .into_iter()
                    .filter_map(|name| index.get(name.text()).copied())
                    .collect();
                ids.sort_unstable();
                Vertex::new(word.clone(), ids)
            })
            .collect();

        let graph = Graph::from_parts(candidates.config().word_length(), vertices, index);
        info!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built word graph"
        );
        graph
    }
}

/// Phase 1 output for one word: its neighbors as words
fn pending_neighbors<'a>(word: &Word, candidates: &'a CandidateSet) -> Vec<&'a Word> {
    neighbors(word.text(), candidates).into_iter().collect()
}
