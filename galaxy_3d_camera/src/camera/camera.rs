/// Camera — perspective camera attached to a scene-graph node.
///
/// The camera derives its view matrix from its parent's world transform,
/// rebuilds its projection whenever a projection parameter or the viewport
/// changes, and caches the eight camera-space frustum corners until the next
/// change invalidates them.
///
/// The scene graph owns the camera. The camera keeps only a weak handle to
/// its parent and is driven from a single update thread.

use std::rc::{Rc, Weak};
use glam::{DMat4, DVec3};
use crate::error::{Error, Result};
use super::bounds::BoundingBox;
use super::frustum::Frustum;
use super::node_parent::NodeParent;
use super::projection::{self, CORNER_COUNT};

const LOG_SOURCE: &str = "galaxy3d::Camera";

/// Default vertical field of view, in degrees.
pub const DEFAULT_FIELD_OF_VIEW: f64 = 45.0;
/// Default near clip distance.
pub const DEFAULT_NEAR_PLANE: f64 = 1.0;
/// Default far clip distance.
pub const DEFAULT_FAR_PLANE: f64 = 120.0;

/// Whether the cached camera-space corners match the current parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    /// Cached corners are up to date
    Clean,
    /// A projection parameter or the viewport changed since the last recompute
    Dirty,
}

/// Projection parameters a camera is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub field_of_view: f64,
    /// Near clip distance (> 0)
    pub near_plane: f64,
    /// Far clip distance (> near)
    pub far_plane: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
        }
    }
}

impl CameraConfig {
    /// Check that the parameters describe a usable perspective projection.
    ///
    /// # Errors
    ///
    /// `Error::InvalidProjection` if the field of view is outside (0, 180)
    /// degrees, or if the clip planes are not finite with far > near > 0.
    pub fn validate(&self) -> Result<()> {
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(Error::InvalidProjection(format!(
                "field of view must be in (0, 180) degrees (got {})",
                self.field_of_view
            )));
        }
        match projection::clip_plane_problem(self.near_plane, self.far_plane) {
            Some(problem) => Err(Error::InvalidProjection(problem)),
            None => Ok(()),
        }
    }
}

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    parent: Option<Weak<dyn NodeParent>>,
    view_matrix: DMat4,
    projection_matrix: DMat4,
    frustum: Frustum,
    /// `None` until the first recompute
    frustum_corners: Option<[DVec3; CORNER_COUNT]>,
    field_of_view: f64,
    near_plane: f64,
    far_plane: f64,
    last_width: u32,
    last_height: u32,
    state: CameraState,
    is_initialized: bool,
    min_bound: DVec3,
    max_bound: DVec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with the default configuration.
    ///
    /// Matrices start as identity, no viewport is known yet (0 x 0) and the
    /// camera is dirty and uninitialized.
    pub fn new() -> Self {
        Self::with_parameters(CameraConfig::default())
    }

    /// Create a camera from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if `config.validate()` fails.
    pub fn from_config(config: CameraConfig) -> Result<Self> {
        config.validate().map_err(Self::log_and_return_error)?;
        crate::engine_debug!(
            LOG_SOURCE,
            "Camera created (fov={}, near={}, far={})",
            config.field_of_view, config.near_plane, config.far_plane
        );
        Ok(Self::with_parameters(config))
    }

    fn with_parameters(config: CameraConfig) -> Self {
        Self {
            parent: None,
            view_matrix: DMat4::IDENTITY,
            projection_matrix: DMat4::IDENTITY,
            frustum: Frustum::default(),
            frustum_corners: None,
            field_of_view: config.field_of_view,
            near_plane: config.near_plane,
            far_plane: config.far_plane,
            last_width: 0,
            last_height: 0,
            state: CameraState::Dirty,
            is_initialized: false,
            min_bound: DVec3::ZERO,
            max_bound: DVec3::ZERO,
        }
    }

    fn log_and_return_error(error: Error) -> Error {
        crate::engine_error!(LOG_SOURCE, "{}", error);
        error
    }

    // ===== PARENT / VIEW MATRIX =====

    /// Attach the camera to a scene-graph node.
    ///
    /// The view matrix is not recomputed until `model_matrix_updated()`.
    pub fn set_parent(&mut self, parent: &Rc<dyn NodeParent>) {
        self.parent = Some(Rc::downgrade(parent));
    }

    pub fn clear_parent(&mut self) {
        self.parent = None;
    }

    /// The parent node, if it is set and still alive.
    pub fn parent(&self) -> Option<Rc<dyn NodeParent>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// World matrix of the parent, identity without a (live) parent.
    fn parent_world_matrix(&self) -> DMat4 {
        self.parent()
            .map(|parent| parent.world_model_matrix())
            .unwrap_or(DMat4::IDENTITY)
    }

    /// Called by the scene graph when the parent's world transform changed.
    pub fn model_matrix_updated(&mut self) {
        self.view_matrix = self.parent_world_matrix().inverse();
    }

    /// View matrix (inverse of the parent's world transform).
    pub fn view_matrix(&self) -> &DMat4 {
        &self.view_matrix
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &DMat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== FRUSTUM =====

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Recompute the frustum planes from a combined view-projection matrix.
    pub fn update_frustum(&mut self, combined: &DMat4) {
        self.frustum.update(combined);
    }

    /// Recompute the frustum planes from this camera's own matrices.
    pub fn refresh_frustum(&mut self) {
        let combined = self.view_projection_matrix();
        self.update_frustum(&combined);
    }

    /// Fill `points` with the camera-space frustum corners.
    ///
    /// Same as `frustum_corners_transformed(points, false)`.
    pub fn frustum_corners(&mut self, points: &mut [DVec3; CORNER_COUNT]) {
        self.frustum_corners_transformed(points, false);
    }

    /// Fill `points` with the frustum corners, in world space if `transformed`.
    ///
    /// A dirty camera first recomputes its camera-space corner cache and
    /// becomes clean. The cache is then copied into `points`; if there is no
    /// cache (and nothing to recompute) `points` keeps its incoming values.
    /// With `transformed`, the output is moved by the parent's world matrix.
    /// The cache itself always stays in camera space.
    ///
    /// Corners are reported on +Z (`z = near` and `z = far`) while the
    /// projection looks down -Z, so they do not match the culling volume of
    /// `frustum()` and are not meant for `Frustum::classify_bounds`.
    pub fn frustum_corners_transformed(&mut self, points: &mut [DVec3; CORNER_COUNT], transformed: bool) {
        if self.state == CameraState::Dirty {
            self.frustum_corners = Some(self.local_corners());
            self.state = CameraState::Clean;
            crate::engine_trace!(LOG_SOURCE, "Frustum corners recomputed");
        }

        if let Some(corners) = &self.frustum_corners {
            *points = *corners;
        }

        if transformed {
            let world = self.parent_world_matrix();
            for point in points.iter_mut() {
                *point = world.transform_point3(*point);
            }
        }
    }

    fn local_corners(&self) -> [DVec3; CORNER_COUNT] {
        projection::frustum_corners(
            self.field_of_view,
            self.aspect_ratio(),
            self.near_plane,
            self.far_plane,
        )
    }

    // ===== BOUNDS =====

    /// Recompute the camera-space box around the frustum corners.
    ///
    /// Uses the last viewport and current projection parameters; the corner
    /// cache and dirty state are left alone.
    pub fn recalculate_bounds(&mut self) {
        let bounds = BoundingBox::from_points(&self.local_corners());
        self.min_bound = bounds.min;
        self.max_bound = bounds.max;
    }

    pub fn min_bound(&self) -> &DVec3 {
        &self.min_bound
    }

    pub fn max_bound(&self) -> &DVec3 {
        &self.max_bound
    }

    /// Bounds from the last `recalculate_bounds()`, in camera space.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.min_bound, self.max_bound)
    }

    /// Bounds from the last `recalculate_bounds()`, moved by the parent's
    /// world matrix.
    ///
    /// Like the corners they enclose, these bounds lie on +Z and do not match
    /// the frustum's -Z culling volume: classifying them against the camera's
    /// own frustum gives `FrustumTest::Outside`.
    pub fn world_bounds(&self) -> BoundingBox {
        self.bounds().transformed(&self.parent_world_matrix())
    }

    // ===== PROJECTION =====

    /// Replace the projection matrix with a copy of `matrix`.
    ///
    /// Marks the camera initialized. The dirty state and the viewport are
    /// left untouched.
    pub fn set_projection_matrix(&mut self, matrix: &DMat4) {
        self.projection_matrix = *matrix;
        self.is_initialized = true;
    }

    /// Rebuild the perspective projection for a `width` x `height` viewport.
    ///
    /// Always marks the camera dirty, even when the size did not change.
    pub fn set_projection_dimensions(&mut self, width: u32, height: u32) {
        // 0x0 with no earlier height is a camera configured before its first resize.
        let viewport_unknown = width == 0 && height == 0 && self.last_height == 0;
        self.last_width = width;
        self.last_height = height;
        self.state = CameraState::Dirty;

        if viewport_unknown {
            crate::engine_debug!(LOG_SOURCE, "Viewport not known yet, projection aspect is undefined");
        } else if height == 0 {
            crate::engine_warn!(LOG_SOURCE, "Viewport height is zero ({}x{}), aspect ratio is undefined", width, height);
        }
        if let Some(problem) = projection::clip_plane_problem(self.near_plane, self.far_plane) {
            crate::engine_warn!(LOG_SOURCE, "Degenerate projection: {}", problem);
        }

        let aspect = self.aspect_ratio();
        projection::write_perspective(
            &mut self.projection_matrix,
            self.field_of_view,
            aspect,
            self.near_plane,
            self.far_plane,
        );
        self.is_initialized = true;

        crate::engine_debug!(
            LOG_SOURCE,
            "Projection rebuilt ({}x{}, fov={})",
            width, height, self.field_of_view
        );
    }

    /// Set the field of view, then rebuild for a `width` x `height` viewport.
    pub fn set_projection_with_fov(&mut self, field_of_view: f64, width: u32, height: u32) {
        self.field_of_view = field_of_view;
        self.set_projection_dimensions(width, height);
    }

    /// Rebuild the projection from two field-of-view extents.
    ///
    /// `fov_x` becomes the field of view; the aspect ratio is `fov_x / fov_y`
    /// instead of the viewport's. The projection matrix is rewritten in place
    /// and the viewport size is left untouched.
    pub fn update_perspective(&mut self, fov_x: f64, fov_y: f64) {
        self.field_of_view = fov_x;
        self.state = CameraState::Dirty;
        projection::write_perspective(
            &mut self.projection_matrix,
            self.field_of_view,
            fov_x / fov_y,
            self.near_plane,
            self.far_plane,
        );
        self.is_initialized = true;
    }

    /// Rebuild the projection from per-side angles (degrees from the view axis).
    pub fn update_perspective_sides(&mut self, left: f64, right: f64, top: f64, bottom: f64) {
        self.update_perspective(left + right, top + bottom);
    }

    /// Resize to a new viewport.
    ///
    /// # Errors
    ///
    /// `Error::InvalidViewport` if either dimension is zero; the camera is
    /// left unchanged in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Self::log_and_return_error(Error::InvalidViewport(format!(
                "viewport must be non-empty (got {}x{})",
                width, height
            ))));
        }
        self.set_projection_dimensions(width, height);
        Ok(())
    }

    // ===== PARAMETERS =====

    pub fn near_plane(&self) -> f64 {
        self.near_plane
    }

    pub fn set_near_plane(&mut self, near_plane: f64) {
        self.near_plane = near_plane;
        self.state = CameraState::Dirty;
        self.set_projection_dimensions(self.last_width, self.last_height);
    }

    pub fn far_plane(&self) -> f64 {
        self.far_plane
    }

    pub fn set_far_plane(&mut self, far_plane: f64) {
        self.far_plane = far_plane;
        self.state = CameraState::Dirty;
        self.set_projection_dimensions(self.last_width, self.last_height);
    }

    /// Field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn set_field_of_view(&mut self, field_of_view: f64) {
        self.field_of_view = field_of_view;
        self.state = CameraState::Dirty;
        self.set_projection_dimensions(self.last_width, self.last_height);
    }

    // ===== STATE =====

    /// Last viewport width in pixels.
    pub fn last_width(&self) -> u32 {
        self.last_width
    }

    /// Last viewport height in pixels.
    pub fn last_height(&self) -> u32 {
        self.last_height
    }

    /// Width / height of the last viewport.
    pub fn aspect_ratio(&self) -> f64 {
        self.last_width as f64 / self.last_height as f64
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == CameraState::Dirty
    }

    /// Force the next corner query to recompute.
    pub fn invalidate(&mut self) {
        self.state = CameraState::Dirty;
    }

    /// True once any projection matrix has been set or built.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
