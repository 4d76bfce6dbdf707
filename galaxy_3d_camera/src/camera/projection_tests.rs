use glam::{DMat4, DVec3, DVec4};
use super::*;

const EPSILON: f64 = 1e-14;

fn assert_matrix_eq(actual: &DMat4, expected: &[f64; 16]) {
    let values = actual.to_cols_array();
    for i in 0..16 {
        assert!(
            (values[i] - expected[i]).abs() < EPSILON,
            "element {}: got {:?}, expected {:?}", i, values, expected
        );
    }
}

// ============================================================================
// perspective
// ============================================================================

#[test]
fn test_perspective_portrait_viewport() {
    let matrix = perspective(45.0, 100.0 / 200.0, 1.0, 120.0);
    assert_matrix_eq(&matrix, &[
        2.414213562373095, 0.0, 0.0, 0.0,
        0.0, 1.2071067811865475, 0.0, 0.0,
        0.0, 0.0, -1.0168067226890756, -1.0,
        0.0, 0.0, -2.0168067226890756, 0.0,
    ]);
}

#[test]
fn test_perspective_square_aspect_has_equal_scales() {
    let matrix = perspective(90.0, 1.0, 0.5, 10.0);
    assert!((matrix.x_axis.x - 1.0).abs() < EPSILON);
    assert!((matrix.y_axis.y - 1.0).abs() < EPSILON);
}

#[test]
fn test_write_perspective_overwrites_every_column() {
    let mut matrix = DMat4::from_cols(
        DVec4::splat(7.0),
        DVec4::splat(7.0),
        DVec4::splat(7.0),
        DVec4::splat(7.0),
    );
    write_perspective(&mut matrix, 45.0, 0.5, 1.0, 120.0);
    assert_eq!(matrix, perspective(45.0, 0.5, 1.0, 120.0));
}

#[test]
fn test_perspective_maps_near_and_far_to_clip_bounds() {
    let matrix = perspective(60.0, 1.5, 1.0, 120.0);

    let near = matrix * DVec4::new(0.0, 0.0, -1.0, 1.0);
    let far = matrix * DVec4::new(0.0, 0.0, -120.0, 1.0);

    assert!((near.z / near.w + 1.0).abs() < 1e-12);
    assert!((far.z / far.w - 1.0).abs() < 1e-12);
}

// ============================================================================
// frustum_corners
// ============================================================================

#[test]
fn test_frustum_corners_reference_values() {
    let corners = frustum_corners(45.0, 2.0, 1.0, 120.0);
    let expected = [
        DVec3::new(-0.8284271247461901, 0.41421356237309503, 1.0),
        DVec3::new(0.8284271247461901, 0.41421356237309503, 1.0),
        DVec3::new(0.8284271247461901, -0.41421356237309503, 1.0),
        DVec3::new(-0.8284271247461901, -0.41421356237309503, 1.0),
        DVec3::new(-99.41125496954281, 49.705627484771405, 120.0),
        DVec3::new(99.41125496954281, 49.705627484771405, 120.0),
        DVec3::new(99.41125496954281, -49.705627484771405, 120.0),
        DVec3::new(-99.41125496954281, -49.705627484771405, 120.0),
    ];

    for i in 0..CORNER_COUNT {
        assert!(corners[i].abs_diff_eq(expected[i], 1e-12), "corner {}: {:?}", i, corners[i]);
    }
}

#[test]
fn test_frustum_corners_far_plane_scales_with_distance() {
    let corners = frustum_corners(70.0, 1.25, 2.0, 50.0);
    let ratio = 50.0 / 2.0;
    for i in 0..4 {
        assert!(corners[i + 4].abs_diff_eq(corners[i] * ratio, 1e-10));
    }
}

// ============================================================================
// clip_plane_problem
// ============================================================================

#[test]
fn test_clip_plane_problem() {
    assert!(clip_plane_problem(1.0, 120.0).is_none());
    assert!(clip_plane_problem(0.0, 120.0).is_some());
    assert!(clip_plane_problem(-1.0, 120.0).is_some());
    assert!(clip_plane_problem(10.0, 10.0).is_some());
    assert!(clip_plane_problem(1.0, f64::INFINITY).is_some());
    assert!(clip_plane_problem(f64::NAN, 10.0).is_some());
}
