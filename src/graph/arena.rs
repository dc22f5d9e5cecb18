//! Word graph stored as an arena of vertices

use super::vertex::{Vertex, VertexId};
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Undirected single-substitution graph over a candidate set
///
/// Vertices live in one `Vec` and refer to each other by [`VertexId`]; a hash
/// index maps each word to its id. Immutable once built.
///
/// Every neighbor id refers to a vertex of this graph, and adjacency is
/// symmetric.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    word_length: usize,
    vertices: Vec<Vertex>,
    index: FxHashMap<Word, VertexId>,
}

impl Graph {
    pub(crate) const fn from_parts(
        word_length: usize,
        vertices: Vec<Vertex>,
        index: FxHashMap<Word, VertexId>,
    ) -> Self {
        Self {
            word_length,
            vertices,
            index,
        }
    }

    /// Number of vertices
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Look up the vertex id of a word
    #[inline]
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<VertexId> {
        self.index.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get a vertex by id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    #[inline]
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get the word of a vertex
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    #[inline]
    #[must_use]
    pub fn word(&self, id: VertexId) -> &Word {
        self.vertex(id).word()
    }

    /// Neighbor ids of a vertex, in lexicographic word order
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id).neighbors().iter().copied()
    }

    /// # Panics
    /// Panics if `id` was not produced by this graph.
    #[inline]
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).degree()
    }

    /// Iterate over all vertices in word order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (VertexId::new(i), vertex))
    }
}
