//! Camera module — perspective camera, frustum, and the math they share.
//!
//! The scene graph owns cameras and notifies them when their parent node
//! moves. The renderer reads back view/projection matrices, the frustum and
//! the frustum corners once per frame.

mod bounds;
mod camera;
mod frustum;
mod node_parent;
pub mod projection;

pub use bounds::BoundingBox;
pub use camera::{
    Camera, CameraConfig, CameraState,
    DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE, DEFAULT_FAR_PLANE,
};
pub use frustum::{
    Frustum, FrustumTest, Plane,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use node_parent::NodeParent;
pub use projection::CORNER_COUNT;
