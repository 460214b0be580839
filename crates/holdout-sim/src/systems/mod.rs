//! Gameplay systems, run by the frame driver in fixed order: player
//! control, steering, physics integration, player-contact detection,
//! projectile-hit detection, snapshot. Rendering runs outside the frame.
//!
//! Systems are free functions over the world; session-wide state lives in
//! the engine, per-entity state in components.

pub mod physics;
pub mod player_contact;
pub mod player_control;
pub mod projectile_hits;
pub mod render;
pub mod snapshot;
pub mod steering;
