//! Steering: each active hostile points its velocity at its named target.
//!
//! Targets are re-resolved by name whenever the cached entity is unset,
//! missing, or inactive. An unresolved target or a zero-length
//! displacement skips the velocity write entirely, so the pass is
//! idempotent for a stationary world and never produces NaN.

use hecs::{Entity, World};

use holdout_core::components::{Active, Hostile, Steering};
use holdout_core::types::{Position, Velocity};

use crate::registry;

pub fn run(world: &mut World) {
    // Buffer writes; Velocity may belong to the target's archetype too.
    let mut writes: Vec<(Entity, Velocity)> = Vec::new();

    {
        let world: &World = world;
        let mut query = world.query::<(&Hostile, &Active, &mut Steering, &Position)>();
        for (entity, (_hostile, active, steering, pos)) in query.iter() {
            if !active.0 {
                continue;
            }

            let target = match resolve_target(world, steering) {
                Some(target) => target,
                // No live target this frame; retry next frame.
                None => continue,
            };
            let target_pos = match world.get::<&Position>(target) {
                Ok(p) => *p,
                Err(_) => continue,
            };

            let delta = pos.delta_to(&target_pos);
            if delta.length_squared() == 0.0 {
                // Co-located with the target: direction is undefined.
                continue;
            }
            writes.push((entity, Velocity::from(delta.normalize() * steering.speed)));
        }
    }

    for (entity, velocity) in writes {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = velocity;
        }
    }
}

fn resolve_target(world: &World, steering: &mut Steering) -> Option<Entity> {
    if let Some(target) = steering.target {
        if registry::is_active(world, target) {
            return Some(target);
        }
    }
    steering.target = registry::find_active_by_name(world, &steering.target_name);
    steering.target
}
