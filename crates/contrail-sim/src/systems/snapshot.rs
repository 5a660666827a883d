//! Frame building: queries the ECS world and emits the ordered draw list.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use contrail_core::components::{Breadcrumb, Helm, Player, Pursuit, ShipId, Sprite, Team};
use contrail_core::constants::CLEAR_COLOR;
use contrail_core::state::{DrawRect, FrameSnapshot, ShipView};
use contrail_core::types::{Position, SimTime, Viewport};

/// Build the complete frame for the step that just ran.
///
/// Draw order: breadcrumbs in spawn order, then ships in ShipId order,
/// both projected through the viewport.
pub fn build_frame(world: &World, time: &SimTime, viewport: &Viewport) -> FrameSnapshot {
    let mut draws = Vec::new();

    // Breadcrumbs first, oldest spawn first.
    let mut crumbs: Vec<(u64, Position, f64, String)> = world
        .query::<(&Breadcrumb, &Position, &Sprite)>()
        .iter()
        .map(|(_, (crumb, position, sprite))| {
            (crumb.seq, *position, sprite.size, sprite.color.clone())
        })
        .collect();
    crumbs.sort_by_key(|(seq, ..)| *seq);
    for (_, position, size, color) in crumbs {
        draws.push(rect(viewport, position, size, color));
    }

    // Ships on top, in id order.
    let mut ships: Vec<(ShipId, Position, Sprite, Helm, u32, bool, Option<u32>)> = world
        .query::<(
            &ShipId,
            &Team,
            &Position,
            &Sprite,
            &Helm,
            Option<&Player>,
            Option<&Pursuit>,
        )>()
        .iter()
        .map(|(_, (id, team, position, sprite, helm, player, pursuit))| {
            (
                *id,
                *position,
                sprite.clone(),
                *helm,
                team.0,
                player.is_some(),
                pursuit.and_then(|p| p.target).map(|t| t.0),
            )
        })
        .collect();
    ships.sort_by_key(|(id, ..)| *id);

    let mut ship_views = Vec::with_capacity(ships.len());
    for (id, position, sprite, helm, team, is_player, target) in ships {
        draws.push(rect(viewport, position, sprite.size, sprite.color));
        ship_views.push(ShipView {
            id: id.0,
            team,
            position,
            heading_deg: helm.heading_deg,
            speed: helm.speed,
            is_player,
            target,
        });
    }

    FrameSnapshot {
        time: *time,
        viewport: *viewport,
        clear_color: CLEAR_COLOR.to_string(),
        draws,
        ships: ship_views,
    }
}

fn rect(viewport: &Viewport, position: Position, size: f64, color: String) -> DrawRect {
    let (x, y) = viewport.project(position, size);
    DrawRect {
        x,
        y,
        width: size.round() as i32,
        height: size.round() as i32,
        color,
    }
}
