//! Core types and definitions for the HOLDOUT simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, constants, input state, the render-sink trait, events,
//! and HUD snapshots. No system logic lives here.

pub mod components;
pub mod constants;
pub mod events;
pub mod input;
pub mod render;
pub mod state;
pub mod types;
