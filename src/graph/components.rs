//! Connected components

use super::arena::Graph;
use super::vertex::VertexId;
use std::collections::VecDeque;

impl Graph {
    /// Partition the vertices into connected components
    ///
    /// Components are returned largest first; ties keep word order of their
    /// smallest member. Ids inside a component are sorted.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::LadderConfig;
    /// use word_ladder::dictionary::CandidateSet;
    /// use word_ladder::graph::build;
    ///
    /// let config = LadderConfig::new(3).unwrap();
    /// let set = CandidateSet::from_words(config, ["cat", "cot", "dog", "fig"]);
    /// let graph = build(&set);
    ///
    /// let components = graph.components();
    /// assert_eq!(components.len(), 3);
    /// assert_eq!(components[0].len(), 2);
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut seen = vec![false; self.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for (start, _) in self.iter() {
            if seen[start.index()] {
                continue;
            }
            seen[start.index()] = true;
            queue.push_back(start);

            let mut members = Vec::new();
            while let Some(current) = queue.pop_front() {
                members.push(current);
                for neighbor in self.neighbors(current) {
                    if !seen[neighbor.index()] {
                        seen[neighbor.index()] = true;
                        queue.push_back(neighbor);
                    }
                }
            }

            members.sort_unstable();
            components.push(members);
        }

        // Stable sort keeps discovery (word) order among equal sizes
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        components
    }
}

#[cfg(test)]
mod tests {
    use crate::core::LadderConfig;
    use crate::dictionary::CandidateSet;
    use crate::graph::build;

    #[test]
    fn splits_disconnected_words() {
        let config = LadderConfig::new(3).unwrap();
        let set = CandidateSet::from_words(config, ["cat", "cot", "cog", "dog", "fig", "fin", "zzz"]);
        let graph = build(&set);

        let components = graph.components();
        let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 2, 1]);

        let words: Vec<&str> = components[1].iter().map(|&id| graph.word(id).text()).collect();
        assert_eq!(words, vec!["fig", "fin"]);
    }

    #[test]
    fn components_cover_every_vertex_once() {
        let config = LadderConfig::new(4).unwrap();
        let set = CandidateSet::from_words(config, ["cold", "cord", "card", "warm", "ward", "fish"]);
        let graph = build(&set);

        let total: usize = graph.components().iter().map(Vec::len).sum();
        assert_eq!(total, graph.len());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let set = CandidateSet::new(LadderConfig::new(3).unwrap());
        assert!(build(&set).components().is_empty());
    }
}
