//! Per-step pursuit steering decision.

use contrail_core::constants::*;
use contrail_core::types::{sign, wrap_signed_deg, Position};

/// Input to the steering decision for a single pursuer.
pub struct PursuitContext {
    pub position: Position,
    /// Own heading in degrees, [0, 360).
    pub heading_deg: f64,
    /// Own speed in world units per step.
    pub speed: f64,
    /// Own turn authority in degrees per step.
    pub turn_rate_deg: f64,
    pub target_position: Position,
    pub target_speed: f64,
}

/// Output of the steering decision, applied to the helm by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmOrder {
    /// Speed delta for this step (negative when easing off).
    pub accel: f64,
    /// Heading delta for this step in degrees.
    pub turn_deg: f64,
}

/// Compute one step's helm order for a pursuer chasing its target.
pub fn steer(ctx: &PursuitContext) -> HelmOrder {
    let range = ctx.position.distance_to(&ctx.target_position);
    let bearing = ctx.position.angle_to_deg(&ctx.target_position);
    let diff = wrap_signed_deg(bearing - ctx.heading_deg);

    let accel = if range < PURSUIT_MATCH_RANGE && diff.abs() < PURSUIT_MATCH_CONE_DEG {
        // Close and facing the target: ease onto its speed, never below it.
        (ctx.target_speed - ctx.speed).clamp(-PURSUIT_EASE_DECEL, 0.0)
    } else {
        PURSUIT_BOOST_ACCEL
    };

    let turn_deg = if diff.abs() > PURSUIT_EVADE_ANGLE_DEG && range < PURSUIT_EVADE_RANGE {
        // Target close behind: swing away instead of into it.
        -ctx.turn_rate_deg * sign(diff)
    } else if diff.abs() > PURSUIT_TURN_DEADBAND_DEG {
        ctx.turn_rate_deg * sign(diff)
    } else {
        0.0
    };

    HelmOrder { accel, turn_deg }
}
