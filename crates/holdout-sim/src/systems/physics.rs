//! Physics integration: `position += velocity * dt`, then the
//! per-category boundary policy.
//!
//! Projectiles are culled once they leave the viewport plus a margin;
//! hostiles roam freely (steering owns their motion); everything else
//! reflects at the bounds and is clamped inside.

use hecs::World;
use rayon::ThreadPool;

use holdout_core::components::{Active, Hostile, Projectile};
use holdout_core::constants::{ENTITY_SPAN, OFFSCREEN_MARGIN};
use holdout_core::types::{Position, Velocity, Viewport};

use crate::parallel;

/// Integrate every entity with position and velocity, serially.
pub fn run(world: &mut World, viewport: Viewport, dt: f32) {
    for (_entity, (pos, vel, active, projectile, hostile)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Active,
        Option<&Projectile>,
        Option<&Hostile>,
    )>() {
        integrate_one(viewport, dt, pos, vel, active, projectile.is_some(), hostile.is_some());
    }
}

/// Parallel variant: contiguous entity batches on the physics pool, joined
/// before returning. Each entity is written by exactly one batch, so no
/// locking is needed.
pub fn run_parallel(world: &mut World, viewport: Viewport, dt: f32, pool: &ThreadPool) {
    let batch_size = parallel::batch_len(world.len() as usize, pool.current_num_threads()) as u32;
    let mut query = world.query::<(
        &mut Position,
        &mut Velocity,
        &mut Active,
        Option<&Projectile>,
        Option<&Hostile>,
    )>();
    pool.scope(|scope| {
        for batch in query.iter_batched(batch_size) {
            scope.spawn(move |_| {
                parallel::run_task(move || {
                    for (_entity, (pos, vel, active, projectile, hostile)) in batch {
                        integrate_one(
                            viewport,
                            dt,
                            pos,
                            vel,
                            active,
                            projectile.is_some(),
                            hostile.is_some(),
                        );
                    }
                });
            });
        }
    });
}

fn integrate_one(
    viewport: Viewport,
    dt: f32,
    pos: &mut Position,
    vel: &mut Velocity,
    active: &mut Active,
    is_projectile: bool,
    is_hostile: bool,
) {
    if !active.0 {
        return;
    }

    pos.x += vel.x * dt;
    pos.y += vel.y * dt;

    if is_projectile {
        // Projectiles never bounce or clamp; past the margin they are done.
        let gone = pos.x < -OFFSCREEN_MARGIN
            || pos.x > viewport.width + OFFSCREEN_MARGIN
            || pos.y < -OFFSCREEN_MARGIN
            || pos.y > viewport.height + OFFSCREEN_MARGIN;
        if gone {
            active.0 = false;
        }
        return;
    }

    if is_hostile {
        return;
    }

    // Default category: reflect per axis at the bounds, then clamp inside.
    let max_x = viewport.width - ENTITY_SPAN;
    let max_y = viewport.height - ENTITY_SPAN;
    if pos.x <= 0.0 || pos.x >= max_x {
        vel.x = -vel.x;
    }
    if pos.y <= 0.0 || pos.y >= max_y {
        vel.y = -vel.y;
    }
    pos.x = pos.x.clamp(0.0, max_x);
    pos.y = pos.y.clamp(0.0, max_y);
}
