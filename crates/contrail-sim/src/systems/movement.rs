//! Kinematic integration: clamp, normalize, move.
//!
//! Runs after the control systems for every ship (entities with a Helm):
//! speed is clamped into [MIN_SPEED, MAX_SPEED], heading is folded into
//! [0, 360), then the position advances one step along the heading.

use glam::DVec2;
use hecs::World;

use contrail_core::components::Helm;
use contrail_core::constants::{MAX_SPEED, MIN_SPEED};
use contrail_core::types::Position;

pub fn run(world: &mut World) {
    for (_entity, (position, helm)) in world.query_mut::<(&mut Position, &mut Helm)>() {
        helm.speed = helm.speed.clamp(MIN_SPEED, MAX_SPEED);
        helm.heading_deg = helm.heading_deg.rem_euclid(360.0);

        let step = DVec2::from_angle(helm.heading_deg.to_radians()) * helm.speed;
        position.x += step.x;
        position.y += step.y;
    }
}
