//! # LaserPath Parser
//!
//! Turns G-code text into cut edges:
//! - Command tokenizer (`S`, `X`, `Y`, `F` fields)
//! - Laser tool state machine
//! - Edge extraction with collinear merging
//! - Streaming readers over files and strings

pub mod command;
pub mod extractor;
pub mod reader;
pub mod tool_state;

pub use command::{parse_fields, CommandParser, MotionCommand};
pub use extractor::{EdgeExtractor, ExtractionStats};
pub use reader::{CommandReader, GcodeFile};
pub use tool_state::ToolState;

use laserpath_core::{Edge, Result};

/// Extract every edge from in-memory G-code
///
/// Stops at the first malformed command.
pub fn extract_edges(text: &str) -> Result<Vec<Edge>> {
    EdgeExtractor::new(CommandReader::from_text(text)).collect()
}
