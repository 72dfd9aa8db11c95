//! # LaserPath Core
//!
//! Geometry primitives and error types shared by the LaserPath crates.
//! Points are quantized to one decimal place on creation; all identity,
//! equality and graph keys are defined on the quantized values.

pub mod error;
pub mod geometry;

pub use error::{Error, ParseError, Result};
pub use geometry::{is_collinear, is_within_bounds, length, quantize, Edge, Point, PointKey};
