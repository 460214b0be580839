//! Builds the per-frame HUD snapshot from registry state and engine
//! counters.

use hecs::World;

use holdout_core::components::{Active, Hostile};
use holdout_core::events::GameEvent;
use holdout_core::state::HudSnapshot;

/// Count of active hostiles in the registry, after this frame's detectors.
pub fn live_enemy_count(world: &World) -> u32 {
    let mut query = world.query::<(&Hostile, &Active)>();
    let count = query.iter().filter(|(_, (_, active))| active.0).count();
    count as u32
}

pub fn build(
    world: &World,
    kill_count: u32,
    survival_secs: f32,
    game_over: bool,
    events: Vec<GameEvent>,
) -> HudSnapshot {
    HudSnapshot {
        kill_count,
        survival_secs,
        live_enemies: live_enemy_count(world),
        game_over,
        events,
    }
}
