//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the input edge tracker and
//! the viewport, merges queued input events, runs all systems in a fixed
//! order each step, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use contrail_core::commands::InputEvent;
use contrail_core::components::{ShipId, Team};
use contrail_core::constants::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use contrail_core::state::FrameSnapshot;
use contrail_core::types::{SimTime, Viewport};

use crate::input::InputState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Screen size the viewport is fixed to for the whole session.
    pub view_width: f64,
    pub view_height: f64,
    /// Skirmish enemies scattered around the player spawn, in addition
    /// to the one fixed pursuer.
    pub extra_pursuers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            extra_pursuers: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all per-session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    input: InputState,
    viewport: Viewport,
    rng: ChaCha8Rng,
    next_ship_id: u32,
    next_crumb_seq: u64,
    event_queue: VecDeque<InputEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create an engine with the session world already set up.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_ship_id = 0;
        world_setup::setup_session(&mut world, &mut rng, &mut next_ship_id, config.extra_pursuers);

        Self {
            world,
            time: SimTime::default(),
            input: InputState::new(),
            viewport: Viewport::new(config.view_width, config.view_height),
            rng,
            next_ship_id,
            next_crumb_seq: 0,
            event_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a raw input event for merging at the next step boundary.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    /// Queue multiple events.
    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Advance the simulation by one step and return the resulting frame.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.merge_events();
        self.time.advance();
        self.run_systems();
        systems::snapshot::build_frame(&self.world, &self.time, &self.viewport)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get a read-only reference to the input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// All live ship ids, ascending.
    pub fn ship_ids(&self) -> Vec<ShipId> {
        let mut ids: Vec<ShipId> = {
            let mut query = self.world.query::<&ShipId>();
            query.iter().map(|(_, id)| *id).collect()
        };
        ids.sort();
        ids
    }

    /// The roster of one team, ascending by ship id.
    pub fn team_roster(&self, team: u32) -> Vec<ShipId> {
        let mut ids: Vec<ShipId> = {
            let mut query = self.world.query::<(&ShipId, &Team)>();
            query
                .iter()
                .filter(|(_, (_, t))| t.0 == team)
                .map(|(_, (id, _))| *id)
                .collect()
        };
        ids.sort();
        ids
    }

    /// Remove a ship from the world (and thus from the global and team
    /// rosters). Contract for a future combat system — nothing in the
    /// step loop calls this. Pursuers chasing the removed ship re-acquire
    /// on their next step.
    pub fn destroy_ship(&mut self, id: ShipId) -> bool {
        let entity = {
            let mut query = self.world.query::<&ShipId>();
            query
                .iter()
                .find(|(_, ship_id)| **ship_id == id)
                .map(|(entity, _)| entity)
        };
        match entity {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Spawn additional pursuers around the player spawn (for testing).
    #[cfg(test)]
    pub fn spawn_test_pursuers(&mut self, count: usize) {
        world_setup::spawn_skirmish(&mut self.world, &mut self.rng, &mut self.next_ship_id, count);
    }

    /// Merge all queued raw events into the input state.
    fn merge_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            self.input.handle_event(&event);
        }
    }

    /// Run all systems in order. Input edge resolution runs last, after
    /// the ship systems have read this step's state.
    fn run_systems(&mut self) {
        // 1. Breadcrumb aging
        systems::breadcrumbs::run(&mut self.world, &mut self.despawn_buffer);
        // 2. Player control
        systems::helm::run(&mut self.world, &self.input);
        // 3. Pursuit AI
        systems::pursuit::run(&mut self.world);
        // 4. Movement integration (clamp, normalize, move)
        systems::movement::run(&mut self.world);
        // 5. Trail spawning
        systems::trail::run(&mut self.world, self.time.step, &mut self.next_crumb_seq);
        // 6. Camera follow
        systems::camera::run(&self.world, &mut self.viewport);
        // 7. Input edge resolution
        self.input.tick();
    }
}
