//! Laser tool state machine

use laserpath_core::{quantize, Point};
use serde::Serialize;

use crate::command::MotionCommand;

/// Current position, power and feed rate of the laser head
///
/// Positions are held quantized. `moved` describes only the most recent
/// command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ToolState {
    x: f64,
    y: f64,
    power: f64,
    feed_rate: f64,
    moved: bool,
}

impl ToolState {
    /// Laser parked at the origin, powered off
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command; absent fields keep their previous value
    pub fn apply(&mut self, command: &MotionCommand) {
        self.moved = false;

        if let Some(power) = command.power {
            self.power = power;
        }
        if let Some(x) = command.x {
            let x = quantize(x);
            self.moved |= x != self.x;
            self.x = x;
        }
        if let Some(y) = command.y {
            let y = quantize(y);
            self.moved |= y != self.y;
            self.y = y;
        }
        if let Some(feed_rate) = command.feed_rate {
            self.feed_rate = feed_rate;
        }
    }

    /// Laser is firing
    pub fn is_on(&self) -> bool {
        self.power > 0.0
    }

    /// The last applied command changed X or Y
    pub fn is_moved(&self) -> bool {
        self.moved
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn feed_rate(&self) -> f64 {
        self.feed_rate
    }

    /// Current head position
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
