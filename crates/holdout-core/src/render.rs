//! Render sink abstraction — the only drawing surface this core issues
//! calls against. The actual backend (window, headless recorder, test
//! double) lives outside the workspace.

use serde::{Deserialize, Serialize};

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const HOSTILE_RED: Color = Color::new(1.0, 0.2, 0.2, 1.0);
    pub const BAR_FILL: Color = Color::new(0.0, 1.0, 0.0, 0.8);
    pub const BAR_BACK: Color = Color::new(1.0, 0.0, 0.0, 0.8);
}

/// Draw-call sink plus viewport dimensions, implemented by the embedder.
pub trait RenderSink {
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}
