//! CONTRAIL host application.
//!
//! Runs the simulation on a dedicated 30 Hz loop thread and exposes it
//! to a drawing surface through channels: input events in, frame
//! snapshots out.

pub mod game_loop;
pub mod state;

pub use contrail_core as core;
