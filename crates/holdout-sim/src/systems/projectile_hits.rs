//! Projectile-vs-hostile hit resolution.
//!
//! A projectile lands at most one hit per frame: the first live hostile in
//! registry order within the hit threshold, not the nearest. Serial and
//! parallel variants resolve the same outcomes; the parallel one guards
//! each hostile's vitals with a mutex so two projectiles can never both
//! claim the same kill.

use std::sync::{Mutex, PoisonError};

use hecs::{Entity, World};
use rayon::ThreadPool;

use holdout_core::components::{Active, Damage, Health, Hostile, Projectile};
use holdout_core::constants::PROJECTILE_HIT_RANGE;
use holdout_core::types::Position;

use crate::parallel;
use crate::registry;

/// Serial hit resolution in registry order. Returns the number of hostiles
/// destroyed by this pass.
pub fn run(world: &mut World, game_over: bool) -> u32 {
    if game_over {
        return 0;
    }

    let projectiles = snapshot_projectiles(world);
    let hostiles: Vec<Entity> = {
        let mut query = world.query::<(&Hostile, &Active, &Position, &Health)>();
        query
            .iter()
            .filter(|(_, (_, active, _, _))| active.0)
            .map(|(entity, _)| entity)
            .collect()
    };

    let mut kills = 0;
    for (projectile, pos, damage) in projectiles {
        for &hostile in &hostiles {
            // An earlier projectile may have downed it this frame.
            if !registry::is_active(world, hostile) {
                continue;
            }
            let hostile_pos = match world.get::<&Position>(hostile) {
                Ok(p) => *p,
                Err(_) => continue,
            };
            if pos.distance_to(&hostile_pos) >= PROJECTILE_HIT_RANGE {
                continue;
            }

            let dead = {
                let mut health = match world.get::<&mut Health>(hostile) {
                    Ok(h) => h,
                    Err(_) => continue,
                };
                health.current = (health.current - damage).max(0);
                health.current == 0
            };
            if let Ok(mut active) = world.get::<&mut Active>(projectile) {
                active.0 = false;
            }
            if dead {
                if let Ok(mut active) = world.get::<&mut Active>(hostile) {
                    active.0 = false;
                }
                kills += 1;
            }
            break;
        }
    }
    kills
}

struct TargetVitals {
    current: i32,
    alive: bool,
}

struct Target {
    entity: Entity,
    pos: Position,
    vitals: Mutex<TargetVitals>,
}

struct BatchOutcome {
    kills: u32,
    spent: Vec<Entity>,
}

/// Parallel variant: projectile batches on the collision pool against a
/// shared hostile snapshot. Kill counts are carried per batch and merged
/// at the join barrier; the world is written back serially afterwards.
pub fn run_parallel(world: &mut World, game_over: bool, pool: &ThreadPool) -> u32 {
    if game_over {
        return 0;
    }

    let projectiles = snapshot_projectiles(world);
    let targets: Vec<Target> = {
        let mut query = world.query::<(&Hostile, &Active, &Position, &Health)>();
        query
            .iter()
            .filter(|(_, (_, active, _, _))| active.0)
            .map(|(entity, (_, _, pos, health))| Target {
                entity,
                pos: *pos,
                vitals: Mutex::new(TargetVitals {
                    current: health.current,
                    alive: true,
                }),
            })
            .collect()
    };

    if projectiles.is_empty() || targets.is_empty() {
        return 0;
    }

    let outcomes = parallel::run_chunked(pool, &projectiles, |batch| {
        let mut outcome = BatchOutcome {
            kills: 0,
            spent: Vec::new(),
        };
        for &(projectile, pos, damage) in batch {
            for target in &targets {
                if pos.distance_to(&target.pos) >= PROJECTILE_HIT_RANGE {
                    continue;
                }
                let hit = {
                    let mut vitals = target.vitals.lock().unwrap_or_else(PoisonError::into_inner);
                    if vitals.alive {
                        vitals.current = (vitals.current - damage).max(0);
                        if vitals.current == 0 {
                            vitals.alive = false;
                            outcome.kills += 1;
                        }
                        true
                    } else {
                        false
                    }
                };
                if hit {
                    outcome.spent.push(projectile);
                    break;
                }
                // Downed mid-stage by another batch; keep scanning.
            }
        }
        outcome
    });

    // Join barrier passed: apply vitals and spent projectiles to the world.
    let mut kills = 0;
    for outcome in &outcomes {
        kills += outcome.kills;
    }
    for target in targets {
        let vitals = target
            .vitals
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
            health.current = vitals.current;
        }
        if !vitals.alive {
            if let Ok(mut active) = world.get::<&mut Active>(target.entity) {
                active.0 = false;
            }
        }
    }
    for outcome in outcomes {
        for projectile in outcome.spent {
            if let Ok(mut active) = world.get::<&mut Active>(projectile) {
                active.0 = false;
            }
        }
    }
    kills
}

fn snapshot_projectiles(world: &World) -> Vec<(Entity, Position, i32)> {
    let mut query = world.query::<(&Projectile, &Active, &Position, &Damage)>();
    let projectiles = query
        .iter()
        .filter(|(_, (_, active, _, _))| active.0)
        .map(|(entity, (_, _, pos, damage))| (entity, *pos, damage.amount))
        .collect();
    projectiles
}
