//! Benchmark command
//!
//! Solves ladders between random word pairs and summarizes the results.

use crate::graph::{Graph, VertexId};
use crate::search::{Ladder, PathFinder, PathResult, SearchError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub pairs: usize,
    /// Fixed seed for reproducible pair selection
    pub seed: Option<u64>,
    pub deadline: Option<Duration>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(pairs: usize) -> Self {
        Self {
            pairs,
            seed: None,
            deadline: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub connected: usize,
    pub disconnected: usize,
    pub timed_out: usize,
    pub average_length: f64,
    pub longest: Option<Ladder>,
    /// Ladder length → number of pairs
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run the benchmark on random pairs drawn from the graph
///
/// An empty graph yields an empty result.
#[must_use]
pub fn run_benchmark(graph: &Graph, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let total_pairs = if graph.is_empty() { 0 } else { config.pairs };

    let pb = if config.show_progress {
        ProgressBar::new(total_pairs as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut finder = PathFinder::new(graph);
    if let Some(limit) = config.deadline {
        finder = finder.with_deadline(limit);
    }

    let mut connected = 0;
    let mut disconnected = 0;
    let mut timed_out = 0;
    let mut total_length = 0;
    let mut longest: Option<Ladder> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();
    for _ in 0..total_pairs {
        let source = graph.word(VertexId::new(rng.random_range(0..graph.len())));
        let target = graph.word(VertexId::new(rng.random_range(0..graph.len())));
        pb.set_message(format!("{source} → {target}"));

        match finder.find(source.text(), target.text()) {
            Ok(PathResult::Found(ladder)) => {
                connected += 1;
                total_length += ladder.len();
                *distribution.entry(ladder.len()).or_insert(0) += 1;
                if longest.as_ref().is_none_or(|best| ladder.len() > best.len()) {
                    longest = Some(ladder);
                }
            }
            Ok(PathResult::NoPath { .. }) => disconnected += 1,
            Err(SearchError::DeadlineExceeded { expanded, .. }) => {
                warn!(%source, %target, expanded, "benchmark search timed out");
                timed_out += 1;
            }
            // Both words come from the graph
            Err(SearchError::UnknownWord { .. }) => disconnected += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let average_length = if connected == 0 {
        0.0
    } else {
        total_length as f64 / connected as f64
    };
    let searches_per_second = if duration.is_zero() {
        0.0
    } else {
        total_pairs as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        total_pairs,
        connected,
        disconnected,
        timed_out,
        average_length,
        longest,
        distribution,
        duration,
        searches_per_second,
    }
}
