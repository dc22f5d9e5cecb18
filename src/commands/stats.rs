//! Graph statistics command

use crate::graph::Graph;

/// Shape of a built word graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub word_length: usize,
    pub vertices: usize,
    pub edges: usize,
    /// Words with no neighbors at all
    pub isolated: usize,
    pub components: usize,
    pub largest_component: usize,
    pub average_degree: f64,
    /// Highest-degree word and its degree; earliest word wins ties
    pub most_connected: Option<(String, usize)>,
}

/// Compute statistics for a graph
#[must_use]
pub fn analyze_graph(graph: &Graph) -> GraphStats {
    let components = graph.components();

    let mut most_connected: Option<(String, usize)> = None;
    let mut isolated = 0;
    for (_, vertex) in graph.iter() {
        let degree = vertex.degree();
        if degree == 0 {
            isolated += 1;
        }
        if most_connected.as_ref().is_none_or(|(_, best)| degree > *best) {
            most_connected = Some((vertex.word().text().to_string(), degree));
        }
    }

    let edges = graph.edge_count();
    let average_degree = if graph.is_empty() {
        0.0
    } else {
        (2 * edges) as f64 / graph.len() as f64
    };

    GraphStats {
        word_length: graph.word_length(),
        vertices: graph.len(),
        edges,
        isolated,
        components: components.len(),
        largest_component: components.first().map_or(0, Vec::len),
        average_degree,
        most_connected,
    }
}
