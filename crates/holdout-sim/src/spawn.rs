//! Entity spawn factories.
//!
//! Entities are inserted into the registry with their full component set
//! already attached; nothing attaches or detaches components after
//! creation.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{
    Active, Damage, Health, HealthBar, Hostile, Name, Physics, Player, Projectile, RenderHook,
    Sprite, Steering,
};
use holdout_core::constants::{
    HOSTILE_CONTACT_DAMAGE, HOSTILE_FRICTION, PLAYER_FRICTION, PLAYER_MAX_HEALTH,
    PROJECTILE_FRICTION, SPAWN_EDGE_MARGIN,
};
use holdout_core::render::Color;
use holdout_core::types::{Position, Velocity, Viewport};

/// Spawn the player with a render hook drawing the layered player visual
/// at its last captured position.
pub fn spawn_player(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Player,
        Name("Player".to_string()),
        Active(true),
        position,
        Velocity::default(),
        Physics {
            friction: PLAYER_FRICTION,
        },
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        player_render_hook(),
    ))
}

fn player_render_hook() -> RenderHook {
    RenderHook {
        last_position: None,
        draw: Box::new(|sink, pos| {
            // Torso, head, and both arms, as layered rectangles.
            sink.draw_rect(pos.x - 8.0, pos.y - 10.0, 16.0, 20.0, Color::new(1.0, 0.0, 0.0, 1.0));
            sink.draw_rect(pos.x - 6.0, pos.y - 22.0, 12.0, 12.0, Color::new(1.0, 0.5, 0.0, 1.0));
            sink.draw_rect(pos.x - 13.0, pos.y - 5.0, 6.0, 12.0, Color::new(1.0, 0.8, 0.0, 1.0));
            sink.draw_rect(pos.x + 7.0, pos.y - 5.0, 6.0, 12.0, Color::new(0.0, 1.0, 0.0, 1.0));
        }),
    }
}

/// Spawn a hostile on a random viewport edge, outside the visible area,
/// with the full chase/combat bundle.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: Viewport,
    health: i32,
    speed: f32,
    size: (f32, f32),
    color: Color,
) -> Entity {
    let position = off_screen_spawn_position(rng, viewport);
    spawn_hostile_at(world, position, health, speed, size, color)
}

/// Spawn a hostile at an explicit position (tests, scripted waves).
pub fn spawn_hostile_at(
    world: &mut World,
    position: Position,
    health: i32,
    speed: f32,
    size: (f32, f32),
    color: Color,
) -> Entity {
    world.spawn((
        Hostile,
        Name("Hostile".to_string()),
        Active(true),
        position,
        Velocity::default(),
        Physics {
            friction: HOSTILE_FRICTION,
        },
        Health {
            current: health,
            max: health,
        },
        Damage {
            amount: HOSTILE_CONTACT_DAMAGE,
        },
        Steering {
            speed,
            target_name: "Player".to_string(),
            target: None,
        },
        Sprite {
            width: size.0,
            height: size.1,
            color,
        },
        HealthBar::default(),
    ))
}

/// Spawn a projectile heading from `start` toward `target`. A zero-length
/// displacement leaves the projectile at rest instead of producing NaN.
pub fn spawn_projectile(
    world: &mut World,
    start: Position,
    target: Position,
    damage: i32,
    speed: f32,
    size: (f32, f32),
    color: Color,
) -> Entity {
    let delta = start.delta_to(&target);
    let velocity = if delta.length_squared() > 0.0 {
        Velocity::from(delta.normalize() * speed)
    } else {
        Velocity::default()
    };

    world.spawn((
        Projectile,
        Name("Projectile".to_string()),
        Active(true),
        start,
        velocity,
        Physics {
            friction: PROJECTILE_FRICTION,
        },
        Damage { amount: damage },
        Sprite {
            width: size.0,
            height: size.1,
            color,
        },
    ))
}

/// Random spawn point a fixed margin off one of the four viewport edges.
fn off_screen_spawn_position(rng: &mut ChaCha8Rng, viewport: Viewport) -> Position {
    match rng.gen_range(0..4u8) {
        // Top
        0 => Position::new(rng.gen_range(0.0..viewport.width), -SPAWN_EDGE_MARGIN),
        // Right
        1 => Position::new(
            viewport.width + SPAWN_EDGE_MARGIN,
            rng.gen_range(0.0..viewport.height),
        ),
        // Bottom
        2 => Position::new(
            rng.gen_range(0.0..viewport.width),
            viewport.height + SPAWN_EDGE_MARGIN,
        ),
        // Left
        _ => Position::new(-SPAWN_EDGE_MARGIN, rng.gen_range(0.0..viewport.height)),
    }
}
