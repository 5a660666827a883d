//! Breadcrumb aging: decrements lifetimes and removes expired crumbs.

use hecs::{Entity, World};

use contrail_core::components::Breadcrumb;

/// Age every breadcrumb by one step and despawn the expired ones.
/// Uses a pre-allocated buffer to avoid per-step allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, crumb) in world.query_mut::<&mut Breadcrumb>() {
        crumb.remaining_steps -= 1;
        if crumb.remaining_steps <= 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
