//! 4×4 matrix math for the camera transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.
//! Minimal set: perspective and look-at; the shader composes them.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection matrix.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (far + near) * range_inv,
        -1.0,
        0.0,
        0.0,
        2.0 * far * near * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix: eye at `eye`, aimed at `target`, `up` defining
/// the roll-free vertical.
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let fwd = normalize(sub(target, eye));
    let side = normalize(cross(fwd, up));
    let cam_up = cross(side, fwd);

    [
        side[0],
        cam_up[0],
        -fwd[0],
        0.0,
        side[1],
        cam_up[1],
        -fwd[1],
        0.0,
        side[2],
        cam_up[2],
        -fwd[2],
        0.0,
        -dot(side, eye),
        -dot(cam_up, eye),
        dot(fwd, eye),
        1.0,
    ]
}

/// Transform a point, dropping the homogeneous coordinate.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    [
        m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12],
        m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13],
        m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14],
    ]
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        // p[0] = f / aspect, p[5] = f
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        // p[11] should be -1 (perspective divide)
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn look_at_from_positive_z() {
        // Eye on +Z looking at the origin: view space keeps X, keeps Y,
        // and puts the origin 1000 units down -Z.
        let view = look_at([0.0, 0.0, 1000.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let origin = transform_point(&view, [0.0, 0.0, 0.0]);
        assert!((origin[0]).abs() < 1e-4);
        assert!((origin[1]).abs() < 1e-4);
        assert!((origin[2] - (-1000.0)).abs() < 1e-3);

        let right = transform_point(&view, [1.0, 0.0, 0.0]);
        assert!((right[0] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn look_at_eye_maps_to_view_origin() {
        let eye = [30.0, -20.0, 1000.0];
        let view = look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let mapped = transform_point(&view, eye);
        assert!(mapped.iter().all(|c| c.abs() < 1e-3));
    }

    #[test]
    fn transform_point_applies_translation_column() {
        let mut m = IDENTITY;
        m[12] = 5.0;
        m[13] = -3.0;
        let p = transform_point(&m, [1.0, 1.0, 1.0]);
        assert_eq!(p, [6.0, -2.0, 1.0]);
    }
}
