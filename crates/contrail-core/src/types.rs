//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, TICK_RATE};

/// 2D position on the world plane (world units, Cartesian).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing to another position in degrees, normalized to [0, 360).
    /// 0 = +x axis, counting toward +y (atan2 convention).
    pub fn angle_to_deg(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }
}

/// Sign of a number: -1.0, 0.0, or 1.0. NaN passes through.
pub fn sign(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Shortest-path signed angular difference in degrees, in (-180, 180].
///
/// A raw difference beyond 180 in magnitude is recomputed via the
/// complementary arc.
pub fn wrap_signed_deg(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each tick).
    pub step: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one step.
    pub fn advance(&mut self) {
        self.step += 1;
        self.elapsed_secs = self.step as f64 / TICK_RATE as f64;
    }
}

/// The camera rectangle: a world-space offset plus a fixed screen size.
///
/// The offset is unclamped — it may go negative or past any world
/// coordinate while following the focused entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left world offset.
    pub x: f64,
    pub y: f64,
    /// Screen size, fixed at session start.
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Recenter on a world position: `offset = center - size / 2`.
    pub fn focus(&mut self, center: Position) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Project a world position to integer screen coordinates.
    ///
    /// `extent` is the entity's visual size; entities larger than one unit
    /// are drawn centered on their position.
    pub fn project(&self, position: Position, extent: f64) -> (i32, i32) {
        let center = if extent > 1.0 { extent / 2.0 } else { 0.0 };
        (
            (position.x - self.x - center).round() as i32,
            (position.y - self.y - center).round() as i32,
        )
    }
}
