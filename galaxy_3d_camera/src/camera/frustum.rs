/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is `normal · p + d = 0` with a unit normal pointing inward.
/// A point is inside the frustum when its signed distance to every plane
/// is >= 0.
///
/// The camera owns one Frustum and rewrites it in place from a combined
/// view-projection matrix every time the renderer asks for an update.

use glam::{DMat4, DVec3, DVec4};
use super::bounds::BoundingBox;

/// Result of a 3-way frustum/box classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Box is entirely outside the frustum
    Outside,
    /// Box is entirely inside the frustum
    Inside,
    /// Box straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Plane equation: normal · p + d = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub d: f64,
}

impl Plane {
    pub fn new(normal: DVec3, d: f64) -> Self {
        Self { normal, d }
    }

    /// Plane from raw (A, B, C, D) coefficients, normalized so |normal| == 1.
    ///
    /// Degenerate coefficients (zero normal) are kept as-is.
    pub fn from_coefficients(coefficients: DVec4) -> Self {
        let normal = coefficients.truncate();
        let length = normal.length();
        if length > 0.0 {
            Self { normal: normal / length, d: coefficients.w / length }
        } else {
            Self { normal, d: coefficients.w }
        }
    }

    /// Signed distance, positive on the inner side.
    pub fn distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.d
    }
}

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Default for Frustum {
    /// The clip-space cube, i.e. the frustum of an identity matrix.
    fn default() -> Self {
        Self::from_view_projection(&DMat4::IDENTITY)
    }
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    pub fn from_view_projection(vp: &DMat4) -> Self {
        let mut frustum = Self {
            planes: [Plane::new(DVec3::ZERO, 0.0); 6],
        };
        frustum.update(vp);
        frustum
    }

    /// Recompute all six planes from a combined view-projection matrix.
    ///
    /// Gribb & Hartmann: each plane is the fourth row of the matrix plus or
    /// minus one of the first three rows.
    pub fn update(&mut self, combined: &DMat4) {
        let row0 = combined.row(0);
        let row1 = combined.row(1);
        let row2 = combined.row(2);
        let row3 = combined.row(3);

        self.planes[PLANE_LEFT] = Plane::from_coefficients(row3 + row0);
        self.planes[PLANE_RIGHT] = Plane::from_coefficients(row3 - row0);
        self.planes[PLANE_BOTTOM] = Plane::from_coefficients(row3 + row1);
        self.planes[PLANE_TOP] = Plane::from_coefficients(row3 - row1);
        self.planes[PLANE_NEAR] = Plane::from_coefficients(row3 + row2);
        self.planes[PLANE_FAR] = Plane::from_coefficients(row3 - row2);
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// One plane, indexed with the PLANE_* constants.
    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes.iter().all(|plane| plane.distance(point) >= 0.0)
    }

    /// Test if a sphere touches the frustum (conservative near the corners).
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.planes.iter().all(|plane| plane.distance(center) >= -radius)
    }

    /// Test if a box intersects this frustum.
    ///
    /// "Positive vertex" test: for each plane, take the box corner furthest
    /// along the normal. If that corner is outside, the box is outside.
    /// May return false positives, never false negatives.
    pub fn intersects_bounds(&self, bounds: &BoundingBox) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance(positive_vertex(plane, bounds)) >= 0.0)
    }

    /// Classify a box against the frustum.
    ///
    /// - p-vertex outside any plane → `Outside`
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_bounds(&self, bounds: &BoundingBox) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if plane.distance(positive_vertex(plane, bounds)) < 0.0 {
                return FrustumTest::Outside;
            }
            if plane.distance(negative_vertex(plane, bounds)) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

/// Box corner most aligned with the plane normal.
fn positive_vertex(plane: &Plane, bounds: &BoundingBox) -> DVec3 {
    let n = plane.normal;
    DVec3::new(
        if n.x >= 0.0 { bounds.max.x } else { bounds.min.x },
        if n.y >= 0.0 { bounds.max.y } else { bounds.min.y },
        if n.z >= 0.0 { bounds.max.z } else { bounds.min.z },
    )
}

/// Box corner least aligned with the plane normal.
fn negative_vertex(plane: &Plane, bounds: &BoundingBox) -> DVec3 {
    let n = plane.normal;
    DVec3::new(
        if n.x >= 0.0 { bounds.min.x } else { bounds.max.x },
        if n.y >= 0.0 { bounds.min.y } else { bounds.max.y },
        if n.z >= 0.0 { bounds.min.z } else { bounds.max.z },
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
