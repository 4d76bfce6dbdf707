/// NodeParent — what the camera needs from the scene graph.
///
/// The scene graph owns the camera, never the reverse: the camera only keeps
/// a `Weak` handle to its parent and asks it for the accumulated world matrix.

use glam::DMat4;

/// A scene-graph node that can hold a camera.
pub trait NodeParent {
    /// Accumulated world transform of this node (identity when the node and
    /// all its ancestors are untransformed).
    fn world_model_matrix(&self) -> DMat4;
}
