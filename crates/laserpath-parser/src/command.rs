//! Motion command tokenizer
//!
//! Extracts the `S`, `X`, `Y` and `F` fields from a single G-code line.
//! Any other word on the line (`G1`, `M3`, ...) is ignored.

use std::sync::OnceLock;

use laserpath_core::ParseError;
use regex::Regex;
use serde::Serialize;

/// Fields carried by one command line
///
/// A field that is absent leaves the corresponding tool state untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MotionCommand {
    /// Source line number (1-based)
    pub line_number: u32,
    /// Laser power (S value)
    pub power: Option<f64>,
    /// Target X (raw, not yet quantized)
    pub x: Option<f64>,
    /// Target Y (raw, not yet quantized)
    pub y: Option<f64>,
    /// Feed rate (F value)
    pub feed_rate: Option<f64>,
}

impl MotionCommand {
    /// True when the command sets none of the tracked fields
    pub fn is_empty(&self) -> bool {
        self.power.is_none() && self.x.is_none() && self.y.is_none() && self.feed_rate.is_none()
    }
}

/// Line-by-line command parser
pub struct CommandParser {
    line_number: u32,
}

impl CommandParser {
    /// Create a new parser starting at line 1
    pub fn new() -> Self {
        Self { line_number: 0 }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Parse the next line
    ///
    /// Returns `Ok(None)` for lines that are blank once comments are removed.
    /// A single malformed field rejects the whole line.
    pub fn parse(&mut self, line: &str) -> Result<Option<MotionCommand>, ParseError> {
        self.line_number += 1;

        let cleaned = remove_comments(line);
        if cleaned.trim().is_empty() {
            return Ok(None);
        }

        parse_fields(&cleaned.to_uppercase(), self.line_number).map(Some)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the fields of an already cleaned line
pub fn parse_fields(line: &str, line_number: u32) -> Result<MotionCommand, ParseError> {
    static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = FIELD_REGEX
        .get_or_init(|| Regex::new(r"([SXYF])([-+]?[0-9.]*)").expect("invalid regex pattern"));

    let mut command = MotionCommand {
        line_number,
        ..MotionCommand::default()
    };

    for caps in regex.captures_iter(line) {
        let field = caps[1].chars().next().unwrap_or_default();
        let raw = &caps[2];
        if raw.is_empty() {
            return Err(ParseError::MissingValue { line_number, field });
        }
        let value: f64 = raw.parse().map_err(|_| ParseError::InvalidNumber {
            line_number,
            field,
            value: raw.to_string(),
        })?;

        // Repeated fields: last one wins
        match field {
            'S' => command.power = Some(value),
            'X' => command.x = Some(value),
            'Y' => command.y = Some(value),
            _ => command.feed_rate = Some(value),
        }
    }

    Ok(command)
}

fn remove_comments(line: &str) -> String {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_REGEX.get_or_init(|| Regex::new(r"[;(].*").expect("invalid regex pattern"));
    regex.replace(line, "").to_string()
}
