//! Explicit per-frame input state.
//!
//! The embedding backend polls its windowing layer and fills an
//! `InputState` value, which is passed into every frame. There is no
//! process-wide input singleton.

use std::collections::HashSet;

use crate::types::Position;

/// Key and pointer state for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<u32>,
    buttons: HashSet<u8>,
    pointer: Position,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, code: u32) {
        self.keys.insert(code);
    }

    pub fn release_key(&mut self, code: u32) {
        self.keys.remove(&code);
    }

    pub fn key_pressed(&self, code: u32) -> bool {
        self.keys.contains(&code)
    }

    /// True if any of the given key codes is down. Movement bindings carry
    /// one code per backend (AWT, GLFW), so most queries go through this.
    pub fn any_key_pressed(&self, codes: &[u32]) -> bool {
        codes.iter().any(|c| self.keys.contains(c))
    }

    pub fn press_button(&mut self, index: u8) {
        self.buttons.insert(index);
    }

    pub fn release_button(&mut self, index: u8) {
        self.buttons.remove(&index);
    }

    pub fn pointer_button_pressed(&self, index: u8) -> bool {
        self.buttons.contains(&index)
    }

    pub fn set_pointer(&mut self, position: Position) {
        self.pointer = position;
    }

    pub fn pointer_position(&self) -> Position {
        self.pointer
    }
}

/// Key codes understood by the player-control bindings. Letter keys share
/// one code everywhere; arrow keys differ between AWT and GLFW backends,
/// so both are bound.
pub mod keys {
    pub const W: u32 = 87;
    pub const A: u32 = 65;
    pub const S: u32 = 83;
    pub const D: u32 = 68;

    pub const UP_AWT: u32 = 38;
    pub const DOWN_AWT: u32 = 40;
    pub const LEFT_AWT: u32 = 37;
    pub const RIGHT_AWT: u32 = 39;

    pub const UP_GLFW: u32 = 265;
    pub const DOWN_GLFW: u32 = 264;
    pub const LEFT_GLFW: u32 = 263;
    pub const RIGHT_GLFW: u32 = 262;
}

/// Primary pointer button (fires projectiles).
pub const POINTER_PRIMARY: u8 = 1;
