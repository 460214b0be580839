//! Fundamental geometric types for the 2D playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in viewport space (pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Viewport dimensions as reported by the render backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.delta_to(other).length()
    }

    /// Displacement vector from self to another position.
    pub fn delta_to(&self, other: &Position) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (pixels per second).
    pub fn speed(&self) -> f32 {
        Vec2::new(self.x, self.y).length()
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::constants::VIEWPORT_WIDTH,
            height: crate::constants::VIEWPORT_HEIGHT,
        }
    }
}
