//! Arena vertices

use crate::core::Word;
use std::fmt;

/// Index of a vertex inside a [`Graph`](super::Graph)
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the graph's vertex arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One word and the ids of its neighbors
///
/// Neighbor ids are sorted, and since vertices are numbered in word order the
/// neighbors are also in lexicographic word order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    word: Word,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    pub(crate) const fn new(word: Word, neighbors: Vec<VertexId>) -> Self {
        Self { word, neighbors }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
