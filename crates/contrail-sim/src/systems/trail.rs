//! Breadcrumb trail: every ship drops a crumb every third step.

use hecs::World;

use contrail_core::components::{Breadcrumb, ShipId, Sprite};
use contrail_core::constants::{BREADCRUMB_COLOR, BREADCRUMB_LIFETIME, TRAIL_INTERVAL};
use contrail_core::types::Position;

/// Spawn one breadcrumb per ship on trail steps.
/// Called after movement, so crumbs mark the position just moved to.
pub fn run(world: &mut World, step: u64, next_seq: &mut u64) {
    if !step.is_multiple_of(TRAIL_INTERVAL) {
        return;
    }

    // Collect first: spawning while a query is live would alias the world.
    let drops: Vec<(Position, f64)> = {
        let mut query = world.query::<(&ShipId, &Position, &Sprite)>();
        query
            .iter()
            .map(|(_, (_id, position, sprite))| (*position, sprite.size))
            .collect()
    };

    for (position, size) in drops {
        world.spawn((
            Breadcrumb {
                seq: *next_seq,
                remaining_steps: BREADCRUMB_LIFETIME,
            },
            position,
            Sprite {
                size,
                color: BREADCRUMB_COLOR.to_string(),
            },
        ));
        *next_seq += 1;
    }
}
