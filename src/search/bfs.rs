//! Breadth-first shortest-path search
//!
//! All edges cost 1, so expanding the frontier in FIFO order reaches the
//! target along a shortest path.

use super::ladder::{Ladder, PathResult};
use crate::graph::{Graph, VertexId};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

/// How many expansions run between deadline checks
const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// Which end of the search a word was given for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Target => write!(f, "Target"),
        }
    }
}

/// Reasons a search could not run to completion
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The word is not a vertex: wrong length, bad letters, or not in the
    /// dictionary
    #[error("{endpoint} word {word:?} is not a {word_length}-letter dictionary word")]
    UnknownWord {
        endpoint: Endpoint,
        word: String,
        word_length: usize,
    },

    #[error("Search gave up after {limit:?} having expanded {expanded} words")]
    DeadlineExceeded { limit: Duration, expanded: usize },
}

/// Find a shortest ladder with no deadline
///
/// # Errors
///
/// Returns `SearchError::UnknownWord` if `source` or `target` is not in the
/// graph.
///
/// # Examples
/// ```
/// use word_ladder::core::LadderConfig;
/// use word_ladder::dictionary::CandidateSet;
/// use word_ladder::graph::build;
/// use word_ladder::search::find_path;
///
/// let config = LadderConfig::new(3).unwrap();
/// let set = CandidateSet::from_words(config, ["cat", "cot", "cog", "dog", "dot"]);
/// let graph = build(&set);
///
/// let result = find_path(&graph, "cat", "dog").unwrap();
/// let ladder = result.ladder().unwrap();
/// assert_eq!(ladder.len(), 4);
/// assert_eq!(ladder.to_string(), "dog <- cog <- cot <- cat");
/// ```
pub fn find_path(graph: &Graph, source: &str, target: &str) -> Result<PathResult, SearchError> {
    PathFinder::new(graph).find(source, target)
}

/// Breadth-first path finder over one graph
///
/// Each call to [`find`](Self::find) owns fresh search state, so one finder
/// can answer any number of queries.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
    deadline: Option<Duration>,
}

/// Per-search bookkeeping
struct SearchState {
    visited: Vec<bool>,
    /// Predecessor each vertex was first discovered from; `None` for the
    /// source and for undiscovered vertices
    origin: Vec<Option<VertexId>>,
    frontier: VecDeque<VertexId>,
    expanded: usize,
    frontier_peak: usize,
}

impl SearchState {
    fn new(size: usize, source: VertexId) -> Self {
        let mut state = Self {
            visited: vec![false; size],
            origin: vec![None; size],
            frontier: VecDeque::new(),
            expanded: 0,
            frontier_peak: 1,
        };
        state.visited[source.index()] = true;
        state.frontier.push_back(source);
        state
    }

    fn discover(&mut self, vertex: VertexId, from: VertexId) {
        self.visited[vertex.index()] = true;
        self.frontier.push_back(vertex);
        let origin = &mut self.origin[vertex.index()];
        if origin.is_none() {
            *origin = Some(from);
        }
        self.frontier_peak = self.frontier_peak.max(self.frontier.len());
    }

    /// Walk the origin chain back from `target`, yielding target → source
    fn trace_back(&self, target: VertexId) -> Vec<VertexId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.origin[current.index()] {
            path.push(previous);
            current = previous;
        }
        path
    }
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub const fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            deadline: None,
        }
    }

    /// Give up once a search has run longer than `limit`
    #[must_use]
    pub const fn with_deadline(mut self, limit: Duration) -> Self {
        self.deadline = Some(limit);
        self
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Find a shortest ladder from `source` to `target`
    ///
    /// When several shortest ladders exist, the one reached first while
    /// visiting neighbors in word order is returned.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::UnknownWord` if either word is not in the graph,
    /// or `SearchError::DeadlineExceeded` if a deadline is set and expires.
    pub fn find(&self, source: &str, target: &str) -> Result<PathResult, SearchError> {
        let source_id = self.resolve(source, Endpoint::Source)?;
        let target_id = self.resolve(target, Endpoint::Target)?;

        let started = Instant::now();
        let mut state = SearchState::new(self.graph.len(), source_id);

        while let Some(current) = state.frontier.pop_front() {
            state.expanded += 1;

            if current == target_id {
                let ladder = self.ladder_from(&state.trace_back(current));
                debug!(
                    source,
                    target,
                    length = ladder.len(),
                    expanded = state.expanded,
                    frontier_peak = state.frontier_peak,
                    "found ladder"
                );
                return Ok(PathResult::Found(ladder));
            }

            self.check_deadline(started, state.expanded)?;
            trace!(word = %self.graph.word(current), "expanding");
            for neighbor in self.graph.neighbors(current) {
                if !state.visited[neighbor.index()] {
                    state.discover(neighbor, current);
                }
            }
        }

        debug!(
            source,
            target,
            expanded = state.expanded,
            frontier_peak = state.frontier_peak,
            "no ladder exists"
        );
        Ok(PathResult::NoPath {
            source: self.graph.word(source_id).clone(),
            target: self.graph.word(target_id).clone(),
        })
    }

    fn resolve(&self, word: &str, endpoint: Endpoint) -> Result<VertexId, SearchError> {
        self.graph
            .id_of(word)
            .ok_or_else(|| SearchError::UnknownWord {
                endpoint,
                word: word.to_string(),
                word_length: self.graph.word_length(),
            })
    }

    fn check_deadline(&self, started: Instant, expanded: usize) -> Result<(), SearchError> {
        let Some(limit) = self.deadline else {
            return Ok(());
        };
        if (expanded - 1) % DEADLINE_CHECK_INTERVAL == 0 && started.elapsed() >= limit {
            return Err(SearchError::DeadlineExceeded { limit, expanded });
        }
        Ok(())
    }

    /// Turn a target → source id chain into a source → target ladder
    fn ladder_from(&self, reversed: &[VertexId]) -> Ladder {
        Ladder::new(
            reversed
                .iter()
                .rev()
                .map(|&id| self.graph.word(id).clone())
                .collect(),
        )
    }
}
