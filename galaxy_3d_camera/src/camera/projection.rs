//! Perspective math shared by the camera's projection rebuild, its corner
//! cache and its bounds.
//!
//! Field of view is given in degrees. The projection is right-handed with a
//! [-1, 1] clip depth range, column-major like everything else in glam.

use glam::{DMat4, DVec3, DVec4};

/// Number of frustum corners (4 near, then 4 far)
pub const CORNER_COUNT: usize = 8;

/// Build a perspective projection matrix.
///
/// `aspect` scales the Y axis: `m11 = m00 * aspect`, with
/// `m00 = 1 / tan(fov / 2)`.
pub fn perspective(field_of_view: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    let mut matrix = DMat4::IDENTITY;
    write_perspective(&mut matrix, field_of_view, aspect, near, far);
    matrix
}

/// Overwrite every column of `matrix` with a perspective projection.
pub fn write_perspective(matrix: &mut DMat4, field_of_view: f64, aspect: f64, near: f64, far: f64) {
    let f = 1.0 / (field_of_view.to_radians() / 2.0).tan();
    let depth = near - far;

    matrix.x_axis = DVec4::new(f, 0.0, 0.0, 0.0);
    matrix.y_axis = DVec4::new(0.0, f * aspect, 0.0, 0.0);
    matrix.z_axis = DVec4::new(0.0, 0.0, (far + near) / depth, -1.0);
    matrix.w_axis = DVec4::new(0.0, 0.0, (2.0 * far * near) / depth, 0.0);
}

/// Camera-space frustum corners.
///
/// Order: near top-left, near top-right, near bottom-right, near bottom-left,
/// then the same four on the far plane. Each plane sits at `z = +distance`.
pub fn frustum_corners(field_of_view: f64, aspect: f64, near: f64, far: f64) -> [DVec3; CORNER_COUNT] {
    let tan_half = (field_of_view.to_radians() / 2.0).tan();

    let near_h = tan_half * near;
    let near_w = near_h * aspect;
    let far_h = tan_half * far;
    let far_w = far_h * aspect;

    [
        DVec3::new(-near_w, near_h, near),
        DVec3::new(near_w, near_h, near),
        DVec3::new(near_w, -near_h, near),
        DVec3::new(-near_w, -near_h, near),
        DVec3::new(-far_w, far_h, far),
        DVec3::new(far_w, far_h, far),
        DVec3::new(far_w, -far_h, far),
        DVec3::new(-far_w, -far_h, far),
    ]
}

/// Returns a description of what is wrong with the clip planes, if anything.
pub(crate) fn clip_plane_problem(near: f64, far: f64) -> Option<String> {
    if !near.is_finite() || !far.is_finite() {
        Some(format!("clip planes must be finite (near={}, far={})", near, far))
    } else if near <= 0.0 {
        Some(format!("near plane must be positive (near={})", near))
    } else if far <= near {
        Some(format!("far plane must lie beyond the near plane (near={}, far={})", near, far))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
