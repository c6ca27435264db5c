//! Perspective camera with pointer-follow easing.

use crate::math::{self, Mat4};

/// Vertical field of view in degrees.
const FOV_Y_DEGREES: f32 = 75.0;
/// Near clip plane.
const NEAR: f32 = 1.0;
/// Far clip plane, generous enough for the widest grid.
const FAR: f32 = 10_000.0;
/// Camera distance from the origin along +Z.
const CAMERA_Z: f32 = 1000.0;
/// Exponential smoothing factor applied per frame while following the pointer.
const POINTER_EASE: f32 = 0.05;

/// The scene camera. Aims at the origin every frame; X/Y drift toward the
/// pointer for the parallax effect, Z never changes.
pub struct WaveCamera {
    aspect: f32,
    position: [f32; 3],
    projection: Mat4,
}

impl WaveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            position: [0.0, 0.0, CAMERA_Z],
            projection: math::perspective(FOV_Y_DEGREES.to_radians(), aspect, NEAR, FAR),
        }
    }

    /// Ease the camera toward the target, 5% of the remaining distance per
    /// frame. No snapping.
    pub fn ease_toward(&mut self, target_x: f32, target_y: f32) {
        self.position[0] += (target_x - self.position[0]) * POINTER_EASE;
        self.position[1] += (target_y - self.position[1]) * POINTER_EASE;
    }

    /// Update the aspect ratio and rebuild the projection matrix.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection = math::perspective(FOV_Y_DEGREES.to_radians(), aspect, NEAR, FAR);
    }

    /// View matrix aimed at the scene origin, +Y up (no roll).
    pub fn view(&self) -> Mat4 {
        math::look_at(self.position, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_height_on_z_axis() {
        let camera = WaveCamera::new(16.0 / 9.0);
        assert_eq!(camera.position(), [0.0, 0.0, 1000.0]);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn ease_moves_five_percent_per_frame() {
        let mut camera = WaveCamera::new(1.0);
        camera.ease_toward(100.0, -40.0);
        let pos = camera.position();
        assert!((pos[0] - 5.0).abs() < 1e-5);
        assert!((pos[1] - (-2.0)).abs() < 1e-5);
        // Z untouched
        assert_eq!(pos[2], 1000.0);
    }

    #[test]
    fn ease_converges_toward_target() {
        let mut camera = WaveCamera::new(1.0);
        for _ in 0..400 {
            camera.ease_toward(100.0, 0.0);
        }
        assert!((camera.position()[0] - 100.0).abs() < 1e-3);
    }

    #[test]
    fn set_aspect_rebuilds_projection() {
        let mut camera = WaveCamera::new(1.0);
        let before = *camera.projection();
        camera.set_aspect(2.0);
        let after = *camera.projection();
        assert!((camera.aspect() - 2.0).abs() < 1e-6);
        // f / aspect halves when the aspect doubles
        assert!((after[0] - before[0] / 2.0).abs() < 1e-6);
        assert_eq!(after[5], before[5]);
    }

    #[test]
    fn set_aspect_same_value_is_stable() {
        let mut camera = WaveCamera::new(1.5);
        camera.set_aspect(1.5);
        let first = *camera.projection();
        camera.set_aspect(1.5);
        assert_eq!(*camera.projection(), first);
    }

    #[test]
    fn view_keeps_centered_camera_axis_aligned() {
        let camera = WaveCamera::new(1.0);
        let view = camera.view();
        let origin = crate::math::transform_point(&view, [0.0, 0.0, 0.0]);
        assert!((origin[2] - (-1000.0)).abs() < 1e-3);
    }
}
