//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod neighbors;
pub mod solve;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use interactive::run_interactive;
pub use neighbors::{NeighborsResult, list_neighbors};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
pub use stats::{GraphStats, analyze_graph};
