//! Geometry primitives: quantized points, point keys and mergeable edges.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Rounds a coordinate to one decimal place.
///
/// Rounding is applied to the exact binary value, so `0.35` (stored just
/// below 0.35) gives `0.3`, and exact ties go to the even digit. Negative
/// zero is folded into `0.0` so that equal coordinates always produce
/// equal keys.
pub fn quantize(value: f64) -> f64 {
    format!("{:.1}", value).parse::<f64>().unwrap_or(value) + 0.0
}

/// Euclidean distance between two points.
pub fn length(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// True when the cross product of `a - c` and `b - c` is exactly zero.
pub fn is_collinear(a: &Point, b: &Point, c: &Point) -> bool {
    let ax = a.x - c.x;
    let ay = a.y - c.y;
    let bx = b.x - c.x;
    let by = b.y - c.y;
    ax * by - ay * bx == 0.0
}

/// True when `c` lies inside the closed rectangle spanned by `a` and `b`.
///
/// The comparison direction on each axis follows the direction from `a`
/// to `b`. When `a` and `b` share an axis value the range on that axis
/// collapses to that single value.
pub fn is_within_bounds(a: &Point, b: &Point, c: &Point) -> bool {
    let alpha = if a.x < b.x { 1.0 } else { -1.0 };
    let beta = if a.y < b.y { 1.0 } else { -1.0 };
    let check_x = alpha * a.x <= alpha * c.x && alpha * c.x <= alpha * b.x;
    let check_y = beta * a.y <= beta * c.y && beta * c.y <= beta * b.y;
    check_x && check_y
}

/// A 2D point quantized to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point, quantizing both coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: quantize(x),
            y: quantize(y),
        }
    }

    /// Quantized X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Quantized Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Textual identity of this point.
    pub fn key(&self) -> PointKey {
        PointKey(format!("X{:.1}Y{:.1}", self.x, self.y))
    }

    /// Distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        length(self, other)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{:.1}Y{:.1}", self.x, self.y)
    }
}

/// Textual point identity of the form `X<value>Y<value>`.
///
/// Keys order lexicographically, which is what the deterministic
/// neighbour tie-break relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PointKey(String);

impl PointKey {
    /// Parse a key back into its point.
    pub fn parse(key: &str) -> Result<Point, ParseError> {
        let invalid = || ParseError::InvalidKey {
            key: key.to_string(),
        };

        let rest = key.strip_prefix('X').ok_or_else(invalid)?;
        let (x, y) = rest.split_once('Y').ok_or_else(invalid)?;
        let x: f64 = x.parse().map_err(|_| invalid())?;
        let y: f64 = y.parse().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }

    /// Point this key refers to.
    pub fn to_point(&self) -> Result<Point, ParseError> {
        Self::parse(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PointKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map(|p| p.key())
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Point> for PointKey {
    fn from(point: &Point) -> Self {
        point.key()
    }
}

/// A straight active-tool segment from `a` to `b`.
///
/// An edge opened on a single point is degenerate (`a == b`) until it is
/// extended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    /// Opens a degenerate edge anchored at `point`.
    pub fn new(point: Point) -> Self {
        Self { a: point, b: point }
    }

    /// Creates an edge between two points.
    pub fn between(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    /// Euclidean length of the edge.
    pub fn length(&self) -> f64 {
        length(&self.b, &self.a)
    }

    /// True when both endpoints share a key.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Moves `b` to `point` when it continues the edge along its line.
    ///
    /// Returns false without touching the edge if `point` is off the line
    /// or already inside the span of the edge.
    pub fn extend(&mut self, point: Point) -> bool {
        if !is_collinear(&self.a, &self.b, &point) {
            return false;
        }
        if is_within_bounds(&self.a, &self.b, &point) {
            return false;
        }
        self.b = point;
        true
    }

    /// Endpoint coordinates as `[[a.x, b.x], [a.y, b.y]]` for plotting.
    pub fn to_plot_points(&self) -> [[f64; 2]; 2] {
        [[self.a.x, self.b.x], [self.a.y, self.b.y]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_to_one_decimal() {
        assert_eq!(quantize(1.26), 1.3);
        assert_eq!(quantize(1.24), 1.2);
        assert_eq!(quantize(-2.06), -2.1);
        assert_eq!(quantize(3.0), 3.0);
    }

    #[test]
    fn test_quantize_rounds_stored_value_not_decimal_literal() {
        assert_eq!(quantize(0.25), 0.2);
        assert_eq!(quantize(0.35), 0.3);
        assert_eq!(quantize(1.25), 1.2);
        assert_eq!(quantize(-1.25), -1.2);
        assert_eq!(quantize(9.94), 9.9);
    }

    #[test]
    fn test_quantize_folds_negative_zero() {
        let q = quantize(-0.04);
        assert_eq!(q, 0.0);
        assert!(q.is_sign_positive());
    }

    #[test]
    fn test_point_key_format() {
        assert_eq!(Point::new(0.0, 0.0).key().as_str(), "X0.0Y0.0");
        assert_eq!(Point::new(3.0, -1.25).key().as_str(), "X3.0Y-1.2");
        assert_eq!(Point::new(-0.01, 12.5).to_string(), "X0.0Y12.5");
    }

    #[test]
    fn test_points_equal_after_quantization() {
        assert_eq!(Point::new(1.04, 2.0), Point::new(0.96, 2.01));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.1, 2.0));
    }

    #[test]
    fn test_within_bounds_direction_aware() {
        let a = Point::new(5.0, 5.0);
        let b = Point::new(0.0, 0.0);
        assert!(is_within_bounds(&a, &b, &Point::new(2.0, 2.0)));
        assert!(is_within_bounds(&a, &b, &Point::new(5.0, 0.0)));
        assert!(!is_within_bounds(&a, &b, &Point::new(6.0, 2.0)));
    }

    #[test]
    fn test_collinear() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        assert!(is_collinear(&a, &b, &Point::new(4.0, 4.0)));
        assert!(!is_collinear(&a, &b, &Point::new(4.0, 4.1)));
    }
}
