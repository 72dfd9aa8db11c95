//! Greedy path decomposition
//!
//! Walks the cut graph from each endpoint in turn, always taking the
//! nearest unused edge. When a walk dead-ends it resumes once from the
//! start node in the other direction, so a start node sitting in the
//! middle of a chain yields one path instead of two. Every edge is used
//! at most once, which bounds the total number of steps by the edge count.
//!
//! This is a single-pass heuristic; it does not minimise path count or
//! travel distance.

use std::collections::VecDeque;

use laserpath_core::{Point, PointKey};
use serde::Serialize;

use crate::graph::{CutGraph, TieBreak};

/// One continuous cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutPath {
    /// Point keys in cutting order
    pub points: Vec<PointKey>,
    /// Accumulated edge length along the path
    pub density: f64,
}

impl CutPath {
    /// Number of edges walked
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Paths in the order they were completed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Decomposition {
    pub paths: Vec<CutPath>,
}

impl Decomposition {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path lengths, parallel to `paths`
    pub fn densities(&self) -> Vec<f64> {
        self.paths.iter().map(|p| p.density).collect()
    }

    pub fn total_density(&self) -> f64 {
        self.paths.iter().map(|p| p.density).sum()
    }

    /// Split into parallel lists of point keys and lengths
    pub fn into_parts(self) -> (Vec<Vec<PointKey>>, Vec<f64>) {
        self.paths.into_iter().map(|p| (p.points, p.density)).unzip()
    }
}

/// Greedy nearest-neighbour path decomposer
#[derive(Debug, Clone, Copy, Default)]
pub struct PathDecomposer {
    tie_break: TieBreak,
}

impl PathDecomposer {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Consume the graph into paths
    ///
    /// Start nodes are visited in ascending `x - y`. Edge weights in
    /// `graph` are left marked as consumed.
    pub fn decompose(&self, graph: &mut CutGraph) -> Decomposition {
        let mut order: Vec<Point> = graph.nodes().to_vec();
        order.sort_by(|a, b| diagonal(a).total_cmp(&diagonal(b)));

        let mut decomposition = Decomposition::default();
        for start in &order {
            if let Some(path) = self.walk(graph, start.key()) {
                tracing::debug!(
                    "Path {} from {}: {} points, density {:.1}",
                    decomposition.len(),
                    start,
                    path.points.len(),
                    path.density
                );
                decomposition.paths.push(path);
            }
        }

        tracing::info!(
            "Decomposed {} nodes into {} paths (total density {:.1})",
            graph.node_count(),
            decomposition.len(),
            decomposition.total_density()
        );
        decomposition
    }

    /// Walk from `start` until stuck in both directions
    ///
    /// Points found after the turnaround are placed before `start`, so the
    /// first walk keeps its direction in the result. The emitted sequence is
    /// the reverse of reversing the partial path in place and appending.
    fn walk(&self, graph: &mut CutGraph, start: PointKey) -> Option<CutPath> {
        let mut points = VecDeque::from([start.clone()]);
        let mut density = 0.0;
        let mut reversed = false;
        let mut tail = start;

        loop {
            match graph.take_step(&tail, self.tie_break) {
                Some((next, weight)) => {
                    tracing::trace!("Step {} -> {} ({:.1})", tail, next, weight);
                    if reversed {
                        points.push_front(next.clone());
                    } else {
                        points.push_back(next.clone());
                    }
                    density += weight;
                    tail = next;
                }
                None if !reversed => {
                    reversed = true;
                    tail = points.front()?.clone();
                }
                None => break,
            }
        }

        if points.len() < 2 {
            return None;
        }
        Some(CutPath {
            points: points.into(),
            density,
        })
    }
}

/// Sort key placing chains near one corner of the layout first
fn diagonal(point: &Point) -> f64 {
    point.x() - point.y()
}
