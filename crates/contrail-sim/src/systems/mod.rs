//! ECS systems that operate on the simulation world each step.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! on the engine.

pub mod breadcrumbs;
pub mod camera;
pub mod helm;
pub mod movement;
pub mod pursuit;
pub mod snapshot;
pub mod trail;
