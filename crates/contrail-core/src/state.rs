//! Frame snapshot — the complete render output produced after each tick.

use serde::{Deserialize, Serialize};

use crate::types::{Position, SimTime, Viewport};

/// Everything an external drawing surface needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// The camera rectangle the draw list was projected through.
    pub viewport: Viewport,
    /// The surface is wiped to this color before drawing.
    pub clear_color: String,
    /// Ordered draw list: breadcrumbs in spawn order, then ships in
    /// ShipId order.
    pub draws: Vec<DrawRect>,
    /// Per-ship telemetry for host overlays.
    pub ships: Vec<ShipView>,
}

/// One filled rectangle in integer screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: String,
}

/// A visible ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: u32,
    pub team: u32,
    pub position: Position,
    /// Heading in degrees, [0, 360).
    pub heading_deg: f64,
    /// Speed in world units per step.
    pub speed: f64,
    pub is_player: bool,
    /// Current pursuit target (AI ships with a resolved target only).
    pub target: Option<u32>,
}
