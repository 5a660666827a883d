//! Pursuit system: resolves AI targets and applies steering orders.
//!
//! The scan is O(ships) per pursuer, O(ships²) overall — fine at this
//! entity count.

use hecs::World;

use contrail_core::components::{Helm, Pursuer, Pursuit, ShipId, Team};
use contrail_core::types::Position;

use contrail_ai::steering::{steer, PursuitContext};
use contrail_ai::targeting::{self, Candidate};

/// One pending helm adjustment, buffered to avoid borrowing the world
/// while iterating it.
struct Order {
    entity: hecs::Entity,
    target: Option<ShipId>,
    accel: f64,
    turn_deg: f64,
}

/// Run the pursuit AI for every AI ship.
pub fn run(world: &mut World) {
    // Roster of all live ships, in ShipId order for determinism.
    let mut roster: Vec<Candidate> = {
        let mut query = world.query::<(&ShipId, &Team, &Position, &Helm)>();
        query
            .iter()
            .map(|(_, (id, team, position, helm))| Candidate {
                id: *id,
                team: team.0,
                position: *position,
                speed: helm.speed,
            })
            .collect()
    };
    roster.sort_by_key(|c| c.id);

    let mut orders: Vec<Order> = Vec::new();
    {
        let mut query = world.query::<(&Pursuer, &Pursuit, &Team, &Position, &Helm)>();
        for (entity, (_marker, pursuit, team, position, helm)) in query.iter() {
            // Resolve the stored target; on a miss, re-acquire.
            let target = pursuit
                .target
                .and_then(|id| targeting::resolve(team.0, id, &roster))
                .or_else(|| {
                    targeting::nearest_enemy(team.0, *position, &roster)
                        .and_then(|id| targeting::resolve(team.0, id, &roster))
                });

            match target {
                Some(quarry) => {
                    let order = steer(&PursuitContext {
                        position: *position,
                        heading_deg: helm.heading_deg,
                        speed: helm.speed,
                        turn_rate_deg: helm.turn_rate_deg,
                        target_position: quarry.position,
                        target_speed: quarry.speed,
                    });
                    orders.push(Order {
                        entity,
                        target: Some(quarry.id),
                        accel: order.accel,
                        turn_deg: order.turn_deg,
                    });
                }
                None => orders.push(Order {
                    entity,
                    target: None,
                    accel: 0.0,
                    turn_deg: 0.0,
                }),
            }
        }
    }

    for order in orders {
        if let Ok(mut pursuit) = world.get::<&mut Pursuit>(order.entity) {
            pursuit.target = order.target;
        }
        if let Ok(mut helm) = world.get::<&mut Helm>(order.entity) {
            helm.speed += order.accel;
            helm.heading_deg += order.turn_deg;
        }
    }
}
