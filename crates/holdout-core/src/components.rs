//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::render::{Color, RenderSink};
use crate::types::Position;

/// Display name of an entity. Not unique; steering resolves its target
/// by name against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Activity flag. Entities are soft-deleted by clearing this flag and are
/// never physically removed mid-session; every system treats an inactive
/// entity as absent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Marks the player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a hostile actor that chases the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks a projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Physical properties beyond velocity. The friction scalar is stored but
/// not consumed by integration (reserved for a drag pass).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Physics {
    pub friction: f32,
}

/// Hit points. Invariant: 0 <= current <= max, max > 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Damage applied on a successful hit. Never negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Damage {
    pub amount: i32,
}

/// Chase-the-target steering parameters. The cached target entity is
/// re-resolved by name whenever it is unset, missing, or inactive.
#[derive(Debug, Clone)]
pub struct Steering {
    pub speed: f32,
    pub target_name: String,
    pub target: Option<hecs::Entity>,
}

/// Rectangle visual drawn at the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Two-rectangle health bar drawn above an entity with Health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthBar {
    /// Offset from the entity position to the bar's center.
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for HealthBar {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: -15.0,
            width: 30.0,
            height: 5.0,
        }
    }
}

/// Custom draw behavior by composition: captured display data plus a
/// registered callback, attached like any other component. Replaces the
/// original engine's anonymous per-entity draw overrides.
pub struct RenderHook {
    /// Position captured by the render pass before the callback runs.
    pub last_position: Option<Position>,
    pub draw: Box<dyn Fn(&mut dyn RenderSink, Position) + Send + Sync>,
}

impl std::fmt::Debug for RenderHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderHook")
            .field("last_position", &self.last_position)
            .finish_non_exhaustive()
    }
}
