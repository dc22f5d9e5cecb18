//! Word graph construction
//!
//! Builds the implicit single-substitution graph over a candidate set as an
//! arena of vertices linked by index.

mod arena;
mod builder;
mod components;
mod neighbors;
mod vertex;

pub use arena::Graph;
pub use builder::{GraphBuilder, build};
pub use neighbors::neighbors;
pub use vertex::{Vertex, VertexId};
