#[cfg(test)]
mod tests {
    use contrail_core::components::ShipId;
    use contrail_core::constants::*;
    use contrail_core::types::Position;

    use crate::steering::{steer, PursuitContext};
    use crate::targeting::{nearest_enemy, resolve, Candidate};

    /// Pursuer at the origin heading along +x; target placed by the caller.
    fn make_context(target: Position, target_speed: f64) -> PursuitContext {
        PursuitContext {
            position: Position::new(0.0, 0.0),
            heading_deg: 0.0,
            speed: MAX_SPEED,
            turn_rate_deg: PURSUER_TURN_RATE_DEG,
            target_position: target,
            target_speed,
        }
    }

    // ---- Throttle ----

    #[test]
    fn test_boost_when_far() {
        let ctx = make_context(Position::new(500.0, 0.0), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.accel, PURSUIT_BOOST_ACCEL);
    }

    #[test]
    fn test_boost_when_close_but_not_facing() {
        // In range but 90 degrees off the nose: still boosting.
        let ctx = make_context(Position::new(0.0, 50.0), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.accel, PURSUIT_BOOST_ACCEL);
    }

    #[test]
    fn test_ease_toward_target_speed() {
        // Close, dead ahead, target slower: ease off by at most the step cap.
        let ctx = make_context(Position::new(50.0, 0.0), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.accel, -PURSUIT_EASE_DECEL);
    }

    #[test]
    fn test_ease_never_undershoots_target_speed() {
        let mut ctx = make_context(Position::new(50.0, 0.0), MIN_SPEED);
        ctx.speed = MIN_SPEED + 0.1; // within one step of the target's speed
        let order = steer(&ctx);
        assert!((order.accel - -0.1).abs() < 1e-12);
        assert_eq!(ctx.speed + order.accel, MIN_SPEED);
    }

    #[test]
    fn test_no_ease_when_already_slower() {
        let mut ctx = make_context(Position::new(50.0, 0.0), MAX_SPEED);
        ctx.speed = MIN_SPEED;
        let order = steer(&ctx);
        assert_eq!(order.accel, 0.0);
    }

    // ---- Steering ----

    #[test]
    fn test_dead_band_holds_course() {
        // 5 degrees off the nose: inside the dead-band, no correction.
        let ctx = make_context(Position::new(200.0, 200.0 * 5f64.to_radians().tan()), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.turn_deg, 0.0);
    }

    #[test]
    fn test_turns_toward_target() {
        // Target 90 degrees to the left (+y): positive diff, positive turn.
        let ctx = make_context(Position::new(0.0, 400.0), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.turn_deg, PURSUER_TURN_RATE_DEG);

        // Target 90 degrees the other way: negative turn.
        let ctx = make_context(Position::new(0.0, -400.0), MIN_SPEED);
        let order = steer(&ctx);
        assert_eq!(order.turn_deg, -PURSUER_TURN_RATE_DEG);
    }

    #[test]
    fn test_evasive_when_close_behind() {
        // Target 170 degrees off the nose at range 100: swing away.
        let bearing = 170f64.to_radians();
        let ctx = make_context(
            Position::new(100.0 * bearing.cos(), 100.0 * bearing.sin()),
            MIN_SPEED,
        );
        let order = steer(&ctx);
        assert_eq!(order.turn_deg, -PURSUER_TURN_RATE_DEG);
    }

    #[test]
    fn test_no_evasion_when_behind_but_far() {
        // Same bearing, range 400: ordinary turn toward the target.
        let bearing = 170f64.to_radians();
        let ctx = make_context(
            Position::new(400.0 * bearing.cos(), 400.0 * bearing.sin()),
            MIN_SPEED,
        );
        let order = steer(&ctx);
        assert_eq!(order.turn_deg, PURSUER_TURN_RATE_DEG);
    }

    // ---- Targeting ----

    fn candidate(id: u32, team: u32, x: f64, y: f64) -> Candidate {
        Candidate {
            id: ShipId(id),
            team,
            position: Position::new(x, y),
            speed: MIN_SPEED,
        }
    }

    #[test]
    fn test_nearest_enemy_minimum_distance_wins() {
        // Teams {0: [A], 1: [B at distance 5, C at distance 2]}: A targets C.
        let roster = vec![
            candidate(0, 0, 0.0, 0.0), // A (self)
            candidate(1, 1, 5.0, 0.0), // B
            candidate(2, 1, 0.0, 2.0), // C
        ];
        let picked = nearest_enemy(0, Position::new(0.0, 0.0), &roster);
        assert_eq!(picked, Some(ShipId(2)));
    }

    #[test]
    fn test_nearest_enemy_tie_first_seen_wins() {
        let roster = vec![
            candidate(0, 0, 0.0, 0.0),
            candidate(1, 1, 3.0, 0.0),
            candidate(2, 1, -3.0, 0.0),
        ];
        let picked = nearest_enemy(0, Position::new(0.0, 0.0), &roster);
        assert_eq!(picked, Some(ShipId(1)));
    }

    #[test]
    fn test_nearest_enemy_skips_own_team() {
        let roster = vec![candidate(0, 0, 0.0, 0.0), candidate(1, 0, 1.0, 0.0)];
        assert_eq!(nearest_enemy(0, Position::new(0.0, 0.0), &roster), None);
    }

    #[test]
    fn test_resolve_stale_target_misses() {
        let roster = vec![candidate(0, 0, 0.0, 0.0), candidate(1, 1, 5.0, 0.0)];
        assert!(resolve(0, ShipId(1), &roster).is_some());
        assert!(resolve(0, ShipId(9), &roster).is_none());
        // A target that ended up on our own team no longer resolves.
        assert!(resolve(0, ShipId(0), &roster).is_none());
    }
}
