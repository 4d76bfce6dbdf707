/// BoundingBox — axis-aligned box in double precision.
///
/// Used for the camera's frustum bounds and as the volume type the
/// frustum classifies.

use glam::{DMat4, DVec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all `points`.
    ///
    /// An empty slice yields an inverted box (min = +inf, max = -inf) that
    /// contains nothing.
    pub fn from_points(points: &[DVec3]) -> Self {
        points.iter().fold(
            Self {
                min: DVec3::splat(f64::INFINITY),
                max: DVec3::splat(f64::NEG_INFINITY),
            },
            |acc, p| Self { min: acc.min.min(*p), max: acc.max.max(*p) },
        )
    }

    /// Transform this box by a matrix, returning the enclosing box.
    ///
    /// Arvo's method: each matrix axis is projected onto the box extents,
    /// giving a tight result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &DMat4) -> BoundingBox {
        let translation = matrix.w_axis.truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        BoundingBox { min: new_min, max: new_max }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive point containment test.
    pub fn contains_point(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
