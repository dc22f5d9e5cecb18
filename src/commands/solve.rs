//! Ladder solving command
//!
//! Runs one search between two words and times it.

use crate::graph::Graph;
use crate::search::{PathFinder, PathResult, SearchError};
use std::time::{Duration, Instant};

/// Configuration for solving one ladder
#[derive(Debug)]
pub struct SolveConfig {
    pub source: String,
    pub target: String,
    pub deadline: Option<Duration>,
}

impl SolveConfig {
    /// Words are lowercased to match the dictionary's normalization
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.trim().to_lowercase(),
            target: target.trim().to_lowercase(),
            deadline: None,
        }
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Result of solving a ladder
#[derive(Debug)]
pub struct SolveResult {
    pub source: String,
    pub target: String,
    pub outcome: PathResult,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.outcome.is_found()
    }
}

/// Solve a ladder between the configured words
///
/// # Errors
///
/// Returns an error if:
/// - The source or target word is not in the graph
/// - The deadline expires before the search finishes
pub fn solve_ladder(config: &SolveConfig, graph: &Graph) -> Result<SolveResult, SearchError> {
    let mut finder = PathFinder::new(graph);
    if let Some(limit) = config.deadline {
        finder = finder.with_deadline(limit);
    }

    let start = Instant::now();
    let outcome = finder.find(&config.source, &config.target)?;

    Ok(SolveResult {
        source: config.source.clone(),
        target: config.target.clone(),
        outcome,
        duration: start.elapsed(),
    })
}
