//! Player control: maps held keys onto the player ship's helm.

use hecs::World;

use contrail_core::components::{Helm, Player};
use contrail_core::constants::{BRAKE_DECEL, THRUST_ACCEL};

use crate::input::{GameKey, InputState};

/// Apply held thrust/brake/turn keys to the player helm.
///
/// Thrust and brake are asymmetric on purpose; turning scales with the
/// ship's own turn rate. Clamping and normalization happen later in the
/// movement system.
pub fn run(world: &mut World, input: &InputState) {
    for (_entity, (_player, helm)) in world.query_mut::<(&Player, &mut Helm)>() {
        if input.is_held(GameKey::Thrust) {
            helm.speed += THRUST_ACCEL;
        }
        if input.is_held(GameKey::Brake) {
            helm.speed -= BRAKE_DECEL;
        }
        if input.is_held(GameKey::TurnLeft) {
            helm.heading_deg -= helm.turn_rate_deg;
        }
        if input.is_held(GameKey::TurnRight) {
            helm.heading_deg += helm.turn_rate_deg;
        }
    }
}
