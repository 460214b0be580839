//! Player control: explicit input state to velocity, viewport clamp, and
//! fire requests.

use hecs::World;

use holdout_core::components::{Active, Player};
use holdout_core::constants::{PLAYER_SPAN, PLAYER_SPEED};
use holdout_core::input::{keys, InputState, POINTER_PRIMARY};
use holdout_core::types::{Position, Velocity, Viewport};

const UP: [u32; 3] = [keys::W, keys::UP_AWT, keys::UP_GLFW];
const DOWN: [u32; 3] = [keys::S, keys::DOWN_AWT, keys::DOWN_GLFW];
const LEFT: [u32; 3] = [keys::A, keys::LEFT_AWT, keys::LEFT_GLFW];
const RIGHT: [u32; 3] = [keys::D, keys::RIGHT_AWT, keys::RIGHT_GLFW];

/// A shot requested this frame; the engine applies the cooldown and spawns
/// the projectile.
#[derive(Debug, Clone, Copy)]
pub struct FireRequest {
    pub from: Position,
    pub toward: Position,
}

/// Apply movement input to the first active player and clamp it to the
/// viewport. The velocity is only written while movement input is held, so
/// the player coasts into the next frame's integration otherwise.
pub fn run(world: &mut World, input: &InputState, viewport: Viewport) -> Option<FireRequest> {
    let mut fire = None;

    for (_entity, (_player, active, pos, vel)) in
        world.query_mut::<(&Player, &Active, &mut Position, &mut Velocity)>()
    {
        if !active.0 {
            continue;
        }

        let mut axis = glam::Vec2::ZERO;
        if input.any_key_pressed(&UP) {
            axis.y -= 1.0;
        }
        if input.any_key_pressed(&DOWN) {
            axis.y += 1.0;
        }
        if input.any_key_pressed(&LEFT) {
            axis.x -= 1.0;
        }
        if input.any_key_pressed(&RIGHT) {
            axis.x += 1.0;
        }

        if axis.length_squared() > 0.0 {
            let v = axis.normalize() * PLAYER_SPEED;
            vel.x = v.x;
            vel.y = v.y;
        }

        pos.x = pos.x.clamp(0.0, viewport.width - PLAYER_SPAN);
        pos.y = pos.y.clamp(0.0, viewport.height - PLAYER_SPAN);

        if input.pointer_button_pressed(POINTER_PRIMARY) {
            fire = Some(FireRequest {
                from: *pos,
                toward: input.pointer_position(),
            });
        }
        break;
    }

    fire
}
