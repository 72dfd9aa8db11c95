//! Optimization report
//!
//! The serialisable result of one pipeline run, handed to whatever renders
//! or exports the paths.

use std::fmt::Write as _;

use laserpath_core::PointKey;
use laserpath_settings::OutputFormat;
use serde::Serialize;

/// Counters describing one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    /// Commands applied to the tool state
    pub commands: u64,
    /// Commands that moved the head
    pub moves: u64,
    /// Edges emitted by extraction
    pub edges: u64,
    /// Zero-length edges left out of the graph
    pub degenerate_edges: u64,
    /// An edge was still open at end of input and was dropped
    pub discarded_open_edge: bool,
    /// Distinct point keys in the graph
    pub graph_nodes: usize,
    /// Distinct adjacencies in the graph
    pub graph_edges: usize,
    /// Paths produced
    pub paths: usize,
    /// Sum of all path densities
    pub total_density: f64,
}

/// Paths, their densities and optional plot data
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub paths: Vec<Vec<PointKey>>,
    pub densities: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<[[f64; 2]; 2]>>,
    pub stats: RunStats,
}

impl OptimizationReport {
    /// Render in the requested format
    ///
    /// `precision` applies to densities in text output.
    pub fn render(&self, format: OutputFormat, precision: u8) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.to_text(precision as usize)),
        }
    }

    fn to_text(&self, precision: usize) -> String {
        let mut out = String::new();
        for (path, density) in self.paths.iter().zip(&self.densities) {
            let keys: Vec<&str> = path.iter().map(|k| k.as_str()).collect();
            let _ = writeln!(out, "{:.*}\t{}", precision, density, keys.join(" "));
        }
        out
    }
}
