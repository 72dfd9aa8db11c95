//! # LaserPath
//!
//! Converts a laser-cutter G-code stream into a small set of continuous
//! cutting paths:
//!
//! 1. **laserpath-parser** - command tokenizer, laser state, edge extraction
//! 2. **laserpath-graph** - cut graph and greedy path decomposition
//! 3. **laserpath-core** - geometry primitives and error types
//! 4. **laserpath-settings** - configuration files
//! 5. **laserpath** - this crate: the pipeline, reports and the binary
//!
//! The pipeline is single-threaded and streams commands; only the graph is
//! held in memory.

pub mod report;

use std::path::Path;

use laserpath_graph::{CutGraph, PathDecomposer};
use laserpath_parser::{CommandReader, EdgeExtractor, GcodeFile, MotionCommand};

pub use laserpath_core::{Edge, Error, ParseError, Point, PointKey, Result};
pub use laserpath_graph::{CutPath, Decomposition, TieBreak};
pub use laserpath_settings::{Config, OutputFormat};
pub use report::{OptimizationReport, RunStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Commands → edges → graph → paths
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run over a G-code file
    ///
    /// The file is closed when the run ends, on success or on error.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<OptimizationReport> {
        let file = GcodeFile::new(path)?;
        tracing::debug!("Input file is {} bytes", file.file_size());
        self.run(file.commands()?)
    }

    /// Run over in-memory G-code
    pub fn run_str(&self, text: &str) -> Result<OptimizationReport> {
        self.run(CommandReader::from_text(text))
    }

    /// Run over any command stream
    ///
    /// Stops at the first command that fails to parse or read.
    pub fn run<I>(&self, commands: I) -> Result<OptimizationReport>
    where
        I: Iterator<Item = Result<MotionCommand>>,
    {
        let extraction = &self.config.extraction;
        let mut extractor =
            EdgeExtractor::new(commands).with_flush_open_edge(extraction.flush_open_edge);

        let mut graph = CutGraph::new();
        let mut plot = self.config.output.include_edges.then(Vec::new);
        let mut degenerate = 0u64;

        for edge in extractor.by_ref() {
            let edge = edge?;
            if extraction.drop_degenerate_edges && edge.is_degenerate() {
                degenerate += 1;
                continue;
            }
            if let Some(plot) = plot.as_mut() {
                plot.push(edge.to_plot_points());
            }
            graph.add_edge(&edge);
        }

        let extracted = extractor.stats();
        let graph_nodes = graph.node_count();
        let graph_edges = graph.edge_count();
        tracing::debug!(
            "Built graph: {} nodes, {} edges ({} degenerate edges skipped)",
            graph_nodes,
            graph_edges,
            degenerate
        );

        let decomposition =
            PathDecomposer::new(self.config.decomposition.tie_break).decompose(&mut graph);

        let stats = RunStats {
            commands: extracted.commands,
            moves: extracted.moves,
            edges: extracted.edges,
            degenerate_edges: degenerate,
            discarded_open_edge: extracted.discarded_open_edge,
            graph_nodes,
            graph_edges,
            paths: decomposition.len(),
            total_density: decomposition.total_density(),
        };
        let (paths, densities) = decomposition.into_parts();

        Ok(OptimizationReport {
            paths,
            densities,
            edges: plot,
            stats,
        })
    }
}

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support
/// - A default level raised by `verbosity` (0 = warn, 1 = info, 2 = debug, 3+ = trace)
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    } else {
        EnvFilter::new(default_level)
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
