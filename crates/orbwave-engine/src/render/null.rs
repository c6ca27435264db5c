//! Null renderer — used for headless runs and tests.
//!
//! Does nothing, draws nothing, costs nothing. Records what it was asked to
//! do so tests can observe the engine's side of the contract.

use crate::math::Mat4;

use super::types::{RenderError, SpriteInstance, SpriteRenderer};

/// A no-op renderer.
#[derive(Debug, Default)]
pub struct NullSpriteRenderer {
    render_calls: u64,
    last_sprite_count: usize,
    tint: [f32; 4],
    size: (u32, u32),
}

impl NullSpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of draws submitted so far.
    pub fn render_calls(&self) -> u64 {
        self.render_calls
    }

    /// Sprite count of the most recent draw.
    pub fn last_sprite_count(&self) -> usize {
        self.last_sprite_count
    }

    /// The tint most recently pushed by the engine.
    pub fn tint(&self) -> [f32; 4] {
        self.tint
    }

    /// The output size most recently pushed by the engine.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl SpriteRenderer for NullSpriteRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_tint(&mut self, tint: [f32; 4]) {
        self.tint = tint;
    }

    fn render(
        &mut self,
        _view: &Mat4,
        _proj: &Mat4,
        sprites: &[SpriteInstance],
    ) -> Result<(), RenderError> {
        self.render_calls += 1;
        self.last_sprite_count = sprites.len();
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
