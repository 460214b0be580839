//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Per-frame gameplay events, collected by the engine and carried on the
/// HUD snapshot. Ordering within a frame follows stage order; ordering
/// among parallel detector batches is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a projectile.
    ShotFired,
    /// A hostile reached the player and dealt contact damage.
    PlayerHit { damage: i32, health_remaining: i32 },
    /// A hostile was destroyed by a projectile.
    HostileDown { kill_count: u32 },
    /// Player health reached zero; the session is over.
    GameOver { survival_secs: f32 },
}
