//! HUD snapshot — the aggregate statistics exposed to the overlay
//! after each frame.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;

/// Statistics reflecting registry state as of the end of the current
/// frame's detector stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// Hostiles destroyed by projectiles since session start.
    pub kill_count: u32,
    /// Seconds survived; stops advancing at game over.
    pub survival_secs: f32,
    /// Active hostiles currently in the registry.
    pub live_enemies: u32,
    pub game_over: bool,
    /// Events emitted during this frame.
    pub events: Vec<GameEvent>,
}
