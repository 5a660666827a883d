//! Camera system: keeps the viewport centered on the player ship.

use hecs::World;

use contrail_core::components::Player;
use contrail_core::types::{Position, Viewport};

/// Refocus the viewport on the player. A world without a player ship
/// leaves the viewport where it was.
pub fn run(world: &World, viewport: &mut Viewport) {
    if let Some((_, (_player, position))) = world.query::<(&Player, &Position)>().iter().next() {
        viewport.focus(*position);
    }
}
