//! Core types and definitions for the CONTRAIL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, frame snapshots, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod state;
pub mod types;
