//! Simulation engine for HOLDOUT, a top-down arena survival loop.
//!
//! Owns the hecs ECS world, runs the gameplay systems in fixed order each
//! frame, and produces HUD snapshots. Completely headless — input arrives
//! as an explicit `InputState` and drawing goes through a `RenderSink` —
//! enabling deterministic testing.

pub mod engine;
pub mod parallel;
pub mod registry;
pub mod spawn;
pub mod systems;

pub use engine::{ExecMode, GameConfig, GameEngine};
