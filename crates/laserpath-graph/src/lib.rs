//! # LaserPath Graph
//!
//! Builds the cut graph from extracted edges and decomposes it into a
//! small number of continuous cutting paths.

pub mod decompose;
pub mod graph;

pub use decompose::{CutPath, Decomposition, PathDecomposer};
pub use graph::{CutGraph, TieBreak, CONSUMED};
