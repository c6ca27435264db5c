//! The wgpu implementation of [`SpriteRenderer`].

use std::sync::Arc;

use winit::window::Window;

use crate::math::Mat4;
use crate::render::types::{RenderError, SpriteInstance, SpriteRenderer};

use super::context::GpuContext;
use super::pipeline::SpritePipeline;

/// Draws the orb sprites onto a window surface with a transparent backdrop.
pub struct GpuSpriteRenderer {
    context: GpuContext,
    pipeline: SpritePipeline,
    tint: [f32; 4],
}

impl GpuSpriteRenderer {
    /// Create a renderer attached to the window, able to hold up to
    /// `sprite_capacity` sprites per frame.
    pub async fn new(window: Arc<Window>, sprite_capacity: u32) -> Result<Self, RenderError> {
        let context = GpuContext::new(window).await?;
        let pipeline = SpritePipeline::new(&context.device, context.format(), sprite_capacity);

        Ok(Self {
            context,
            pipeline,
            tint: [1.0, 1.0, 1.0, 1.0],
        })
    }

    /// Current output size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (
            self.context.surface_config.width,
            self.context.surface_config.height,
        )
    }
}

impl SpriteRenderer for GpuSpriteRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    fn set_tint(&mut self, tint: [f32; 4]) {
        self.tint = tint;
    }

    fn render(
        &mut self,
        view: &Mat4,
        proj: &Mat4,
        sprites: &[SpriteInstance],
    ) -> Result<(), RenderError> {
        self.pipeline
            .prepare(&self.context.queue, view, proj, self.tint, sprites);

        let output = self.context.current_texture()?;
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("orbwave sprite encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbwave sprite pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pipeline.render(&mut pass);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
