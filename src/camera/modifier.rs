use glam::Vec3;

use super::core::Camera;

/// Uncommitted camera edit staged by an in-progress gesture.
///
/// The committed [`Camera`] is never touched while a gesture is running; a
/// renderer previews the edit with [`CameraModifier::apply`], and a cancelled
/// gesture just drops (or [`clear`](Self::clear)s) the modifier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraModifier {
    /// Offset added to the eye position.
    pub position: Vec3,
    /// Offset added to the target.
    pub target: Vec3,
    /// Offset added to the up vector.
    pub up: Vec3,
}

impl CameraModifier {
    /// Whether the modifier holds no edit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Reset every delta to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Camera as it would look with this edit committed.
    #[must_use]
    pub fn apply(&self, camera: &Camera) -> Camera {
        let mut preview = camera.clone();
        if !self.is_zero() {
            preview.look_at(
                camera.from() + self.position,
                camera.target() + self.target,
                camera.up() + self.up,
            );
        }
        preview
    }
}
