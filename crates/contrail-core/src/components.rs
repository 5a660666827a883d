//! ECS components for ship and breadcrumb entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marker: the one player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marker: an AI-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuer;

/// Stable ship identity, assigned monotonically at spawn.
///
/// Used for pursuit-target references and for deterministic ordering of
/// render output and target-selection tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// Team membership. Ships on different teams pursue each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team(pub u32);

/// Visual appearance: a filled square of `size` world units.
/// `size` is also the centering extent used when projecting to screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub size: f64,
    pub color: String,
}

/// Steering and throttle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Helm {
    /// Heading in degrees, kept in [0, 360) by the movement system.
    pub heading_deg: f64,
    /// Speed in world units per step, kept in [MIN_SPEED, MAX_SPEED].
    pub speed: f64,
    /// Turn authority in degrees per step.
    pub turn_rate_deg: f64,
}

/// Pursuit state for AI ships.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Pursuit {
    /// Current pursuit target, resolved against the live roster on every
    /// read. `None` (or a stale id) re-triggers nearest-enemy selection.
    pub target: Option<ShipId>,
    /// Steps to wait before re-acquiring a target. Always zero in the
    /// current behavior.
    pub reaction_delay: u32,
}

/// A short-lived trail particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Spawn sequence number, for stable render ordering.
    pub seq: u64,
    /// Remaining lifetime in steps; the crumb despawns at <= 0.
    pub remaining_steps: i32,
}
