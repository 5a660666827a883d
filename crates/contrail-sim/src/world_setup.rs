//! Entity spawn factories for setting up the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use contrail_core::components::{Helm, Player, Pursuer, Pursuit, ShipId, Sprite, Team};
use contrail_core::constants::*;
use contrail_core::types::Position;

/// Set up a session: the player at the fixed spawn, one pursuer at the
/// fixed enemy spawn, plus any skirmish extras scattered around the
/// player on a seeded random ring.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_ship_id: &mut u32,
    extra_pursuers: usize,
) {
    spawn_player(world, next_ship_id, Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    spawn_pursuer(
        world,
        next_ship_id,
        Position::new(PURSUER_SPAWN_X, PURSUER_SPAWN_Y),
        PURSUER_TEAM,
    );
    spawn_skirmish(world, rng, next_ship_id, extra_pursuers);
}

/// Scatter `count` pursuers on a seeded random ring around the player
/// spawn point.
pub fn spawn_skirmish(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_ship_id: &mut u32,
    count: usize,
) {
    for _ in 0..count {
        let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let range: f64 = rng.gen_range(SKIRMISH_MIN_RANGE..SKIRMISH_MAX_RANGE);
        let position = Position::new(
            PLAYER_SPAWN_X + range * bearing.cos(),
            PLAYER_SPAWN_Y + range * bearing.sin(),
        );
        spawn_pursuer(world, next_ship_id, position, PURSUER_TEAM);
    }
}

/// Spawn the player ship. Ships start at minimum speed heading along +x.
pub fn spawn_player(world: &mut World, next_ship_id: &mut u32, position: Position) -> hecs::Entity {
    let id = ShipId(*next_ship_id);
    *next_ship_id += 1;

    world.spawn((
        Player,
        id,
        Team(PLAYER_TEAM),
        position,
        Sprite {
            size: SHIP_SIZE,
            color: PLAYER_COLOR.to_string(),
        },
        Helm {
            heading_deg: 0.0,
            speed: MIN_SPEED,
            turn_rate_deg: PLAYER_TURN_RATE_DEG,
        },
    ))
}

/// Spawn an AI pursuer with no initial target; the pursuit system
/// acquires one on its first step.
pub fn spawn_pursuer(
    world: &mut World,
    next_ship_id: &mut u32,
    position: Position,
    team: u32,
) -> hecs::Entity {
    let id = ShipId(*next_ship_id);
    *next_ship_id += 1;

    world.spawn((
        Pursuer,
        id,
        Team(team),
        position,
        Sprite {
            size: SHIP_SIZE,
            color: PURSUER_COLOR.to_string(),
        },
        Helm {
            heading_deg: 0.0,
            speed: MIN_SPEED,
            turn_rate_deg: PURSUER_TURN_RATE_DEG,
        },
        Pursuit::default(),
    ))
}
