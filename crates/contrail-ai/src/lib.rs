//! Pursuit AI for CONTRAIL.
//!
//! Pure functions that pick targets and compute per-step helm orders.
//! No ECS dependency — operates on plain data.

pub mod steering;
pub mod targeting;

pub use contrail_core as core;

#[cfg(test)]
mod tests;
