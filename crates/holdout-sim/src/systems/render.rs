//! Render pass: sprites, health bars, and render hooks for active
//! entities. Draw calls only; the sole state change is the hook's captured
//! position.

use hecs::World;

use holdout_core::components::{Active, Health, HealthBar, RenderHook, Sprite};
use holdout_core::render::{Color, RenderSink};
use holdout_core::types::Position;

pub fn run(world: &mut World, sink: &mut dyn RenderSink) {
    // Sprites, centered on the entity position.
    {
        let mut query = world.query::<(&Active, &Position, &Sprite)>();
        for (_entity, (active, pos, sprite)) in query.iter() {
            if !active.0 {
                continue;
            }
            sink.draw_rect(
                pos.x - sprite.width / 2.0,
                pos.y - sprite.height / 2.0,
                sprite.width,
                sprite.height,
                sprite.color,
            );
        }
    }

    // Health bars: background, then proportional fill on top.
    {
        let mut query = world.query::<(&Active, &Position, &Health, &HealthBar)>();
        for (_entity, (active, pos, health, bar)) in query.iter() {
            if !active.0 {
                continue;
            }
            let fraction = if health.max > 0 {
                health.current as f32 / health.max as f32
            } else {
                0.0
            };
            let x = pos.x - bar.width / 2.0 + bar.offset_x;
            let y = pos.y + bar.offset_y;
            sink.draw_rect(x, y, bar.width, bar.height, Color::BAR_BACK);
            sink.draw_rect(x, y, bar.width * fraction, bar.height, Color::BAR_FILL);
        }
    }

    // Render hooks: capture the position, then invoke the callback with it.
    {
        let mut query = world.query::<(&Active, &Position, &mut RenderHook)>();
        for (_entity, (active, pos, hook)) in query.iter() {
            if !active.0 {
                continue;
            }
            hook.last_position = Some(*pos);
            (hook.draw)(sink, *pos);
        }
    }
}
