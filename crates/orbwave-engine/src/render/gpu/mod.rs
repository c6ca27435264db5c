//! wgpu-backed sprite rendering.

mod context;
mod pipeline;
mod renderer;

pub use context::GpuContext;
pub use renderer::GpuSpriteRenderer;
