//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{Touch, TouchPhase, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use orbwave_config::{merge, WaveConfig, WaveOptions};
use orbwave_engine::input::TouchPoint;
use orbwave_engine::render::GpuSpriteRenderer;
use orbwave_engine::WaveEngine;

/// Top-level application state: the window, the engine, and the set of
/// currently active touches.
pub struct WaveApp {
    options: WaveOptions,
    window: Option<Arc<Window>>,
    engine: Option<WaveEngine<GpuSpriteRenderer>>,
    // winit reports touches one at a time; the engine wants the whole
    // simultaneous set.
    active_touches: Vec<(u64, TouchPoint)>,
}

impl WaveApp {
    pub fn new(options: WaveOptions) -> Self {
        Self {
            options,
            window: None,
            engine: None,
            active_touches: Vec::new(),
        }
    }

    /// Create the window, the GPU renderer, and the engine. Returns false
    /// when any of the three fails; the caller exits the loop.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = Window::default_attributes()
            .with_title("orbwave")
            .with_transparent(true);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let sprite_capacity = merge(WaveConfig::default(), &self.options).orb_count() as u32;
        let renderer =
            match pollster::block_on(GpuSpriteRenderer::new(window.clone(), sprite_capacity)) {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!("Failed to create renderer: {e}");
                    return false;
                }
            };

        let size = window.inner_size();
        let engine = match WaveEngine::new(renderer, size.width, size.height, &self.options) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!("Failed to start wave engine: {e}");
                return false;
            }
        };

        self.window = Some(window);
        self.engine = Some(engine);
        true
    }

    fn handle_touch(&mut self, touch: Touch) {
        let point = TouchPoint {
            page_x: touch.location.x,
            page_y: touch.location.y,
        };

        match touch.phase {
            TouchPhase::Started => self.active_touches.push((touch.id, point)),
            TouchPhase::Moved => {
                if let Some(entry) = self.active_touches.iter_mut().find(|(id, _)| *id == touch.id)
                {
                    entry.1 = point;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.retain(|(id, _)| *id != touch.id);
            }
        }

        let touches: Vec<TouchPoint> = self.active_touches.iter().map(|(_, p)| *p).collect();
        if let Some(engine) = self.engine.as_mut() {
            match touch.phase {
                TouchPhase::Started => {
                    engine.handle_touch_start(&touches);
                }
                TouchPhase::Moved => {
                    engine.handle_touch_move(&touches);
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {}
            }
        }
    }
}

impl ApplicationHandler for WaveApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                if let Some(engine) = self.engine.as_mut() {
                    engine.destroy();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.handle_resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.handle_pointer_move(position.x, position.y);
                }
            }

            WindowEvent::Touch(touch) => self.handle_touch(touch),

            WindowEvent::RedrawRequested => {
                if let Some(engine) = self.engine.as_mut() {
                    if let Err(e) = engine.advance_frame() {
                        tracing::error!("Render error: {e}");
                    }
                    // Keep the frame sequence going until teardown.
                    if !engine.is_destroyed() {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }

            _ => {}
        }
    }
}
