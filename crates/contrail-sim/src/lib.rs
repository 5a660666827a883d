//! Simulation engine for CONTRAIL.
//!
//! Owns the hecs ECS world, runs systems at a fixed step rate,
//! and produces FrameSnapshots for the drawing surface.

pub mod engine;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use contrail_core as core;
pub use engine::SimulationEngine;
