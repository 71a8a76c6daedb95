//! Virtual trackball rotation.

use glam::{Quat, Vec3};

/// Rotation for a trackball drag of `(x, y)` radians, screen y up.
///
/// `v` is the eye offset from the target (`from - target`). `up` and
/// `right` span the image plane: pass the camera basis
/// ([`Camera::basis_up`](crate::Camera::basis_up) and
/// [`Camera::right`](crate::Camera::right)), not the raw up vector, which
/// need not be orthogonal to `v`. The drag is mapped onto that plane and
/// the view rotates about the in-plane axis perpendicular to it, so the
/// scene follows the pointer. A zero drag gives the identity.
#[must_use]
pub fn trackball(x: f32, y: f32, v: Vec3, up: Vec3, right: Vec3) -> Quat {
    let angle = x.hypot(y);
    let n = v.normalize_or_zero();
    let axis = (right * x + up * y).cross(n).normalize_or_zero();
    if angle == 0.0 || axis == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle)
}
