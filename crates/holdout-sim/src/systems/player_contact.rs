//! Player-vs-hostile contact detector. Always serial: the early exit on
//! player death is defined in registry order.

use hecs::{Entity, World};

use holdout_core::components::{Active, Damage, Health, Hostile};
use holdout_core::constants::MELEE_RANGE;
use holdout_core::events::GameEvent;
use holdout_core::types::Position;

use crate::registry;

/// Scan active hostiles in registry order against the player position. A
/// hostile in melee range lands its damage and is consumed (deactivated).
/// When the player's health reaches zero the pass stops immediately;
/// hostiles later in the order are left unresolved.
pub fn run(world: &mut World, game_over: &mut bool, events: &mut Vec<GameEvent>) {
    if *game_over {
        return;
    }

    let player = match registry::find_active_player(world) {
        Some(player) => player,
        None => return,
    };
    let player_pos = match world.get::<&Position>(player) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    if world.get::<&Health>(player).is_err() {
        return;
    }

    let hostiles: Vec<(Entity, Position, i32)> = {
        let mut query = world.query::<(&Hostile, &Active, &Position, &Damage)>();
        query
            .iter()
            .filter(|(_, (_, active, _, _))| active.0)
            .map(|(entity, (_, _, pos, damage))| (entity, *pos, damage.amount))
            .collect()
    };

    for (hostile, pos, damage) in hostiles {
        if player_pos.distance_to(&pos) >= MELEE_RANGE {
            continue;
        }

        let remaining = {
            let mut health = match world.get::<&mut Health>(player) {
                Ok(health) => health,
                Err(_) => return,
            };
            health.current = (health.current - damage).max(0);
            health.current
        };
        if let Ok(mut active) = world.get::<&mut Active>(hostile) {
            active.0 = false;
        }
        events.push(GameEvent::PlayerHit {
            damage,
            health_remaining: remaining,
        });

        if remaining == 0 {
            *game_over = true;
            break;
        }
    }
}
