//! Renderer trait and shared types.

use crate::math::Mat4;

/// Errors from the rendering backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RenderError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceError(e.to_string())
    }
}

/// One orb to draw this frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    /// World-space center.
    pub center: [f32; 3],
    /// Sprite diameter in world units.
    pub size: f32,
}

/// What the engine needs from a renderer: a resizable output, one shared
/// tint, and a synchronous draw of the full sprite set.
pub trait SpriteRenderer {
    /// Resize the output to new pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Update the shared sprite tint (RGBA, each component 0.0..=1.0).
    fn set_tint(&mut self, tint: [f32; 4]);

    /// Draw every sprite with the given view and projection matrices.
    fn render(
        &mut self,
        view: &Mat4,
        proj: &Mat4,
        sprites: &[SpriteInstance],
    ) -> Result<(), RenderError>;
}

// =============================================================================
// Tests
// =============================================================================
