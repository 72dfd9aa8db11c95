//! Cut graph
//!
//! Undirected weighted graph over distinct endpoint keys. Each adjacent
//! pair carries one weight, the edge length. The decomposer flips weights
//! to [`CONSUMED`] as it walks them.

use std::collections::HashMap;

use laserpath_core::{Edge, Point, PointKey};
use serde::{Deserialize, Serialize};

/// Weight marking an edge already used by a path
pub const CONSUMED: f64 = -1.0;

/// Neighbour selection rule when several edges share the minimum weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// First candidate in hash map iteration order; varies between runs
    Unordered,
    /// Smallest neighbour key wins
    #[default]
    Lexicographic,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unordered => write!(f, "unordered"),
            Self::Lexicographic => write!(f, "lexicographic"),
        }
    }
}

/// Symmetric adjacency map plus the endpoint list that drives decomposition
///
/// The endpoint list is not deduplicated: a point shared by N edges appears
/// N times. A second edge between the same two keys overwrites the weight
/// of the first.
#[derive(Debug, Clone, Default)]
pub struct CutGraph {
    nodes: Vec<Point>,
    adjacency: HashMap<PointKey, HashMap<PointKey, f64>>,
}

impl CutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge sequence
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Record an edge in both directions
    pub fn add_edge(&mut self, edge: &Edge) {
        let (a, b) = (edge.a(), edge.b());
        let (key_a, key_b) = (a.key(), b.key());
        let weight = edge.length();

        self.nodes.push(a);
        self.nodes.push(b);

        self.adjacency
            .entry(key_a.clone())
            .or_default()
            .insert(key_b.clone(), weight);
        self.adjacency.entry(key_b).or_default().insert(key_a, weight);
    }

    /// Endpoints in insertion order, duplicates included
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Weight between two keys, if they are adjacent
    pub fn weight(&self, from: &PointKey, to: &PointKey) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Neighbours of a key with their current weights
    pub fn neighbors(&self, key: &PointKey) -> Option<&HashMap<PointKey, f64>> {
        self.adjacency.get(key)
    }

    /// Number of distinct point keys
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected adjacencies
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(from, neighbors)| neighbors.keys().filter(|to| from <= *to).count())
            .sum()
    }

    /// Adjacencies that have not been consumed yet
    pub fn available_edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(|(to, weight)| from <= *to && **weight > 0.0)
                    .count()
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Take the nearest unconsumed edge out of `current`
    ///
    /// Returns the neighbour and the edge weight, after marking the edge
    /// consumed in both directions. Returns `None` when every edge at
    /// `current` has already been used.
    pub fn take_step(
        &mut self,
        current: &PointKey,
        tie_break: TieBreak,
    ) -> Option<(PointKey, f64)> {
        let (next, weight) = {
            let candidates = self
                .adjacency
                .get(current)?
                .iter()
                .filter(|(_, weight)| **weight > 0.0);

            let best = match tie_break {
                TieBreak::Unordered => candidates.min_by(|a, b| a.1.total_cmp(b.1)),
                TieBreak::Lexicographic => {
                    candidates.min_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)))
                }
            }?;
            (best.0.clone(), *best.1)
        };

        self.consume(current, &next);
        Some((next, weight))
    }

    fn consume(&mut self, from: &PointKey, to: &PointKey) {
        if let Some(weight) = self.adjacency.get_mut(from).and_then(|n| n.get_mut(to)) {
            *weight = CONSUMED;
        }
        if let Some(weight) = self.adjacency.get_mut(to).and_then(|n| n.get_mut(from)) {
            *weight = CONSUMED;
        }
    }
}

impl Extend<Edge> for CutGraph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(&edge);
        }
    }
}

impl FromIterator<Edge> for CutGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_break_display() {
        assert_eq!(TieBreak::Unordered.to_string(), "unordered");
        assert_eq!(TieBreak::default(), TieBreak::Lexicographic);
    }

    #[test]
    fn test_edge_count_ignores_direction() {
        let graph = CutGraph::from_edges([
            Edge::between(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
            Edge::between(Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
        ]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 3);
    }
}
