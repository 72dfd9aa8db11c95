//! Edge extraction
//!
//! Drives a [`ToolState`] through a command stream and emits the straight
//! segments cut while the laser is on. Consecutive collinear moves are
//! merged into a single edge; the edge is closed when the laser turns off
//! or when the next move does not extend it.

use laserpath_core::{Edge, Result};
use serde::Serialize;

use crate::command::MotionCommand;
use crate::tool_state::ToolState;

/// Counters collected while extracting edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Commands applied to the tool state
    pub commands: u64,
    /// Commands that changed the head position
    pub moves: u64,
    /// Edges emitted downstream
    pub edges: u64,
    /// An edge was still open when the input ended and was dropped
    pub discarded_open_edge: bool,
}

/// Lazy, single-pass edge stream over a command stream
///
/// Edges come out in command order. An error from the command source is
/// passed through as-is; the caller decides whether to stop.
pub struct EdgeExtractor<I> {
    commands: I,
    state: ToolState,
    open: Option<Edge>,
    flush_open_edge: bool,
    finished: bool,
    stats: ExtractionStats,
}

impl<I> EdgeExtractor<I>
where
    I: Iterator<Item = Result<MotionCommand>>,
{
    /// Create an extractor with the laser parked at the origin
    pub fn new(commands: I) -> Self {
        Self {
            commands,
            state: ToolState::new(),
            open: None,
            flush_open_edge: false,
            finished: false,
            stats: ExtractionStats::default(),
        }
    }

    /// Emit the edge left open at end of input instead of dropping it
    pub fn with_flush_open_edge(mut self, flush: bool) -> Self {
        self.flush_open_edge = flush;
        self
    }

    /// Current tool state
    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// Edge currently being grown, if the laser is on
    pub fn open_edge(&self) -> Option<&Edge> {
        self.open.as_ref()
    }

    /// Counters so far
    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    /// Apply one command, returning an edge if it closed one
    fn step(&mut self, command: &MotionCommand) -> Option<Edge> {
        self.state.apply(command);
        self.stats.commands += 1;
        if self.state.is_moved() {
            self.stats.moves += 1;
        }

        if !self.state.is_on() {
            return self.open.take();
        }

        let point = self.state.point();
        if self.open.is_none() {
            self.open = Some(Edge::new(point));
            return None;
        }

        let edge = self.open.as_mut()?;
        if edge.extend(point) {
            return None;
        }
        let next = Edge::between(edge.b(), point);
        Some(std::mem::replace(edge, next))
    }

    fn finish(&mut self) -> Option<Edge> {
        self.finished = true;
        let edge = self.open.take()?;
        if self.flush_open_edge {
            return Some(edge);
        }

        tracing::warn!(
            "Dropping edge {} -> {} still open at end of input",
            edge.a(),
            edge.b()
        );
        self.stats.discarded_open_edge = true;
        None
    }
}

impl<I> Iterator for EdgeExtractor<I>
where
    I: Iterator<Item = Result<MotionCommand>>,
{
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let edge = match self.commands.next() {
                Some(Ok(command)) => self.step(&command),
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    let edge = self.finish();
                    tracing::debug!(
                        commands = self.stats.commands,
                        moves = self.stats.moves,
                        edges = self.stats.edges + edge.is_some() as u64,
                        "Edge extraction finished"
                    );
                    edge
                }
            };

            if let Some(edge) = edge {
                self.stats.edges += 1;
                tracing::trace!("Edge {} -> {} ({:.1})", edge.a(), edge.b(), edge.length());
                return Some(Ok(edge));
            }
            if self.finished {
                return None;
            }
        }
    }
}
