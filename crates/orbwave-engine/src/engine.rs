//! The wave engine.
//!
//! Owns the orb grid, the camera, the frame clock, pointer state, the
//! listener records, and the renderer, and performs all per-frame math.
//! The host drives it: one `advance_frame` per display refresh, input and
//! resize events routed to the handlers, `destroy` exactly once at the end
//! (though extra calls are harmless).

use orbwave_config::{merge, unpack_rgb, WaveConfig, WaveOptions};

use crate::camera::WaveCamera;
use crate::clock::{FrameClock, FrameLoop};
use crate::grid::OrbGrid;
use crate::input::{PointerState, TouchPoint};
use crate::listeners::{InputEvent, ListenerSet};
use crate::render::{RenderError, SpriteInstance, SpriteRenderer};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("surface has zero extent: {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The animated orb wave, bound to one renderer and one surface.
pub struct WaveEngine<R: SpriteRenderer> {
    config: WaveConfig,
    camera: WaveCamera,
    grid: OrbGrid,
    clock: FrameClock,
    frame_loop: FrameLoop,
    pointer: PointerState,
    half_width: f64,
    half_height: f64,
    listeners: ListenerSet,
    renderer: Option<R>,
    instances: Vec<SpriteInstance>,
    disposed: bool,
}

impl<R: SpriteRenderer> WaveEngine<R> {
    /// Build the engine over a laid-out surface.
    ///
    /// `options` are merged over the defaults; `width`/`height` are the
    /// surface's current pixel dimensions and must both be non-zero — a
    /// zero-extent surface has no aspect ratio to give the camera.
    pub fn new(
        mut renderer: R,
        width: u32,
        height: u32,
        options: &WaveOptions,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ZeroExtent { width, height });
        }

        let config = merge(WaveConfig::default(), options);
        renderer.set_tint(unpack_rgb(config.color));

        let camera = WaveCamera::new(width as f32 / height as f32);
        let grid = OrbGrid::new(&config);
        let instances = Vec::with_capacity(grid.len());

        let mut listeners = ListenerSet::default();
        listeners.register("surface", InputEvent::PointerMove);
        listeners.register("surface", InputEvent::TouchStart);
        listeners.register("surface", InputEvent::TouchMove);
        listeners.register("window", InputEvent::Resize);

        tracing::info!(
            "wave engine ready: {} orbs on a {width}x{height} surface",
            grid.len(),
        );

        Ok(Self {
            config,
            camera,
            grid,
            clock: FrameClock::new(),
            frame_loop: FrameLoop::new(),
            pointer: PointerState::default(),
            half_width: width as f64 / 2.0,
            half_height: height as f64 / 2.0,
            listeners,
            renderer: Some(renderer),
            instances,
            disposed: false,
        })
    }

    /// Run one frame: ease the camera toward the pointer, re-aim it at the
    /// origin, apply the wave pass, draw, then advance the clock.
    ///
    /// Once the frame loop is cancelled this does nothing at all. A failed
    /// draw propagates and is not retried.
    pub fn advance_frame(&mut self) -> Result<(), EngineError> {
        if !self.frame_loop.begin_frame() {
            return Ok(());
        }

        self.camera
            .ease_toward(self.pointer.x as f32, -self.pointer.y as f32);

        self.grid
            .update(self.clock.count(), self.config.height, self.config.scale);
        self.grid.write_instances(&mut self.instances);

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.camera.view(), self.camera.projection(), &self.instances)?;
        }

        self.clock.advance(self.config.speed);
        Ok(())
    }

    /// Pointer moved over the surface, in surface coordinates.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if !self.listeners.is_armed(InputEvent::PointerMove) {
            return;
        }
        self.pointer.x = x - self.half_width;
        self.pointer.y = y - self.half_height;
    }

    /// A touch began. Returns true when the touch was consumed and the
    /// host should suppress the platform's default gesture handling.
    pub fn handle_touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        self.on_touch(InputEvent::TouchStart, touches)
    }

    /// A touch moved. Same consumption contract as [`handle_touch_start`].
    ///
    /// [`handle_touch_start`]: WaveEngine::handle_touch_start
    pub fn handle_touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        self.on_touch(InputEvent::TouchMove, touches)
    }

    fn on_touch(&mut self, event: InputEvent, touches: &[TouchPoint]) -> bool {
        if !self.listeners.is_armed(event) {
            return false;
        }
        // Only a single-finger gesture steers the wave.
        if touches.len() != 1 {
            return false;
        }
        self.pointer.x = touches[0].page_x - self.half_width;
        self.pointer.y = touches[0].page_y - self.half_height;
        true
    }

    /// The surface changed size. Updates the camera projection and the
    /// renderer output; zero-extent events are ignored.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if !self.listeners.is_armed(InputEvent::Resize) {
            return;
        }
        if width == 0 || height == 0 {
            return;
        }
        self.half_width = width as f64 / 2.0;
        self.half_height = height as f64 / 2.0;
        self.camera.set_aspect(width as f32 / height as f32);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }

    /// Apply a partial option update: supplied values win, absent ones keep
    /// their current value.
    ///
    /// `color` is pushed into the renderer tint immediately; `height`,
    /// `speed`, and `scale` are read live each frame. `separation`,
    /// `amount_x`, and `amount_y` are accepted into the config but the grid
    /// is never rebuilt, so they have no visible effect.
    pub fn update_opts(&mut self, partial: &WaveOptions) {
        self.config = merge(self.config, partial);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_tint(unpack_rgb(self.config.color));
        }
    }

    /// Tear the engine down: stop the frame loop, release the renderer and
    /// every orb, and unbind every listener. Idempotent — a second call
    /// does nothing.
    pub fn destroy(&mut self) {
        if self.disposed {
            return;
        }
        self.frame_loop.cancel();
        // Dropping the renderer detaches the output and releases the
        // shared pipeline resources exactly once.
        self.renderer = None;
        self.grid.clear();
        self.instances.clear();
        let unbound = self.listeners.unregister_all();
        self.disposed = true;
        tracing::info!("wave engine destroyed ({unbound} listeners unbound)");
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn camera(&self) -> &WaveCamera {
        &self.camera
    }

    pub fn grid(&self) -> &OrbGrid {
        &self.grid
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Current wave phase.
    pub fn clock_count(&self) -> f64 {
        self.clock.count()
    }

    /// Number of frames that have run. Frozen after [`destroy`].
    ///
    /// [`destroy`]: WaveEngine::destroy
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn is_destroyed(&self) -> bool {
        self.disposed
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSpriteRenderer;

    fn engine_with(
        width: u32,
        height: u32,
        options: WaveOptions,
    ) -> WaveEngine<NullSpriteRenderer> {
        WaveEngine::new(NullSpriteRenderer::new(), width, height, &options).unwrap()
    }

    fn small_engine() -> WaveEngine<NullSpriteRenderer> {
        engine_with(
            800,
            600,
            WaveOptions {
                amount_x: Some(2),
                amount_y: Some(2),
                ..Default::default()
            },
        )
    }

    #[test]
    fn zero_extent_surface_is_a_construction_error() {
        let err = WaveEngine::new(NullSpriteRenderer::new(), 0, 600, &WaveOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, EngineError::ZeroExtent { width: 0, height: 600 }));
        assert_eq!(err.to_string(), "surface has zero extent: 0x600");

        assert!(WaveEngine::new(NullSpriteRenderer::new(), 800, 0, &WaveOptions::default())
            .is_err());
    }

    #[test]
    fn two_by_two_grid_lands_on_the_documented_positions() {
        let engine = small_engine();
        let planar: Vec<(f64, f64)> = engine.grid().orbs().iter().map(|o| (o.x, o.z)).collect();
        assert_eq!(
            planar,
            vec![(-100.0, -100.0), (-100.0, 0.0), (0.0, -100.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn construction_applies_frame_zero_heights() {
        let engine = engine_with(
            640,
            480,
            WaveOptions {
                amount_x: Some(3),
                amount_y: Some(4),
                ..Default::default()
            },
        );
        let config = *engine.config();
        for ix in 0..3u32 {
            for iy in 0..4u32 {
                let orb = engine.grid().orb(ix, iy).unwrap();
                let expected =
                    (ix as f64 * 0.3).sin() * config.height + (iy as f64 * 0.5).sin() * 50.0;
                assert!((orb.y - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn construction_pushes_the_tint_into_the_renderer() {
        let engine = engine_with(
            800,
            600,
            WaveOptions {
                color: Some(0xff8000),
                ..Default::default()
            },
        );
        let tint = engine.renderer().unwrap().tint();
        assert!((tint[0] - 1.0).abs() < 1e-6);
        assert!((tint[1] - 128.0 / 255.0).abs() < 1e-6);
        assert!(tint[2].abs() < 1e-6);
    }

    #[test]
    fn ten_frames_at_speed_one_reach_phase_one() {
        let mut engine = small_engine();
        for _ in 0..10 {
            engine.advance_frame().unwrap();
        }
        assert!((engine.clock_count() - 1.0).abs() < 1e-9);
        assert_eq!(engine.frames(), 10);
        assert_eq!(engine.renderer().unwrap().render_calls(), 10);
        assert_eq!(engine.renderer().unwrap().last_sprite_count(), 4);
    }

    #[test]
    fn zero_speed_freezes_the_wave() {
        let mut engine = engine_with(
            800,
            600,
            WaveOptions {
                speed: Some(0.0),
                amount_x: Some(2),
                amount_y: Some(2),
                ..Default::default()
            },
        );
        let before: Vec<f64> = engine.grid().orbs().iter().map(|o| o.y).collect();
        for _ in 0..5 {
            engine.advance_frame().unwrap();
        }
        let after: Vec<f64> = engine.grid().orbs().iter().map(|o| o.y).collect();
        assert_eq!(engine.clock_count(), 0.0);
        assert_eq!(before, after);
    }

    #[test]
    fn pointer_move_is_measured_from_the_surface_center() {
        let mut engine = small_engine();
        engine.handle_pointer_move(500.0, 200.0);
        assert_eq!(engine.pointer(), PointerState { x: 100.0, y: -100.0 });
    }

    #[test]
    fn camera_eases_five_percent_toward_the_pointer() {
        let mut engine = small_engine();
        engine.handle_pointer_move(500.0, 200.0); // offset (100, -100)
        engine.advance_frame().unwrap();
        let pos = engine.camera().position();
        assert!((pos[0] - 5.0).abs() < 1e-4);
        // Camera Y follows the negated pointer Y.
        assert!((pos[1] - 5.0).abs() < 1e-4);
    }

    #[test]
    fn single_touch_steers_and_is_consumed() {
        let mut engine = small_engine();
        let consumed = engine.handle_touch_start(&[TouchPoint {
            page_x: 420.0,
            page_y: 330.0,
        }]);
        assert!(consumed);
        assert_eq!(engine.pointer(), PointerState { x: 20.0, y: 30.0 });
    }

    #[test]
    fn multi_touch_is_ignored_and_not_consumed() {
        let mut engine = small_engine();
        let touches = [
            TouchPoint {
                page_x: 100.0,
                page_y: 100.0,
            },
            TouchPoint {
                page_x: 300.0,
                page_y: 300.0,
            },
        ];
        assert!(!engine.handle_touch_start(&touches));
        assert!(!engine.handle_touch_move(&touches));
        assert_eq!(engine.pointer(), PointerState::default());

        assert!(!engine.handle_touch_move(&[]));
    }

    #[test]
    fn resize_updates_camera_and_renderer_and_is_idempotent() {
        let mut engine = small_engine();
        engine.handle_resize(1000, 500);
        assert!((engine.camera().aspect() - 2.0).abs() < 1e-6);
        assert_eq!(engine.renderer().unwrap().size(), (1000, 500));
        let projection = *engine.camera().projection();

        engine.handle_resize(1000, 500);
        assert!((engine.camera().aspect() - 2.0).abs() < 1e-6);
        assert_eq!(engine.renderer().unwrap().size(), (1000, 500));
        assert_eq!(*engine.camera().projection(), projection);
    }

    #[test]
    fn resize_recenters_the_pointer_origin() {
        let mut engine = small_engine();
        engine.handle_resize(400, 400);
        engine.handle_pointer_move(200.0, 200.0);
        assert_eq!(engine.pointer(), PointerState::default());
    }

    #[test]
    fn zero_extent_resize_is_ignored() {
        let mut engine = small_engine();
        let aspect = engine.camera().aspect();
        engine.handle_resize(0, 500);
        assert_eq!(engine.camera().aspect(), aspect);
    }

    #[test]
    fn empty_update_changes_no_option() {
        let mut engine = small_engine();
        let before = *engine.config();
        engine.update_opts(&WaveOptions::default());
        assert_eq!(*engine.config(), before);
    }

    #[test]
    fn update_touches_only_the_supplied_option() {
        let mut engine = small_engine();
        let before = *engine.config();
        engine.update_opts(&WaveOptions {
            height: Some(10.0),
            ..Default::default()
        });
        let after = *engine.config();
        assert_eq!(after.height, 10.0);
        assert_eq!(after.color, before.color);
        assert_eq!(after.speed, before.speed);
        assert_eq!(after.scale, before.scale);
        assert_eq!(after.separation, before.separation);
    }

    #[test]
    fn update_pushes_the_new_tint() {
        let mut engine = small_engine();
        engine.update_opts(&WaveOptions {
            color: Some(0x0000ff),
            ..Default::default()
        });
        let tint = engine.renderer().unwrap().tint();
        assert!(tint[0].abs() < 1e-6);
        assert!((tint[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn grid_shape_updates_are_accepted_but_never_rebuild() {
        let mut engine = small_engine();
        engine.update_opts(&WaveOptions {
            amount_x: Some(10),
            separation: Some(1.0),
            ..Default::default()
        });
        assert_eq!(engine.config().amount_x, 10);
        assert_eq!(engine.config().separation, 1.0);
        // Still the original four orbs at the original spacing.
        assert_eq!(engine.grid().len(), 4);
        assert_eq!(engine.grid().orbs()[0].x, -100.0);
    }

    #[test]
    fn destroy_stops_frames_and_releases_everything() {
        let mut engine = small_engine();
        engine.advance_frame().unwrap();
        engine.destroy();
        assert!(engine.is_destroyed());
        assert!(engine.renderer().is_none());
        assert!(engine.grid().is_empty());

        // The frame probe stays constant from here on.
        let frames = engine.frames();
        engine.advance_frame().unwrap();
        engine.advance_frame().unwrap();
        assert_eq!(engine.frames(), frames);
        assert_eq!(engine.clock_count(), 0.1);
    }

    #[test]
    fn destroy_twice_is_safe() {
        let mut engine = small_engine();
        engine.destroy();
        engine.destroy();
        assert!(engine.is_destroyed());
    }

    #[test]
    fn input_is_dead_after_destroy() {
        let mut engine = small_engine();
        engine.destroy();

        engine.handle_pointer_move(700.0, 700.0);
        assert_eq!(engine.pointer(), PointerState::default());

        assert!(!engine.handle_touch_start(&[TouchPoint {
            page_x: 10.0,
            page_y: 10.0,
        }]));

        let aspect = engine.camera().aspect();
        engine.handle_resize(100, 100);
        assert_eq!(engine.camera().aspect(), aspect);
    }
}
