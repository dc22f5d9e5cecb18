//! Shortest-path search over the word graph

mod bfs;
mod ladder;

pub use bfs::{Endpoint, PathFinder, SearchError, find_path};
pub use ladder::{Ladder, PathResult};
