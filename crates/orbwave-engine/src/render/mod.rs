//! Rendering capability for the wave engine.
//!
//! The engine never talks to a graphics API directly; it hands a camera and
//! a sprite set to a [`SpriteRenderer`]. The wgpu implementation draws on a
//! real window surface; the null implementation backs headless runs and
//! tests.

pub mod gpu;
mod null;
mod types;

pub use gpu::GpuSpriteRenderer;
pub use null::NullSpriteRenderer;
pub use types::{RenderError, SpriteInstance, SpriteRenderer};
