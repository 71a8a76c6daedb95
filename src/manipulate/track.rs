use glam::{Vec2, Vec3};

use super::Motion;
use crate::camera::Camera;

/// Pan eye and target together so the point under the cursor at the
/// target's depth follows the pointer.
pub(super) fn track(
    drag: Vec2,
    camera: &Camera,
    viewport: Vec2,
) -> Option<Motion> {
    if drag == Vec2::ZERO || viewport.x <= 0.0 {
        return None;
    }

    let v = camera.from() - camera.target();
    // Pixels to world units on the image plane through the target.
    let drag_scale = camera.distance() * camera.half_horizontal_aperture()
        / (viewport.x * 0.5);
    let drag = drag * drag_scale;

    let x = v.cross(camera.up()).normalize_or_zero();
    let y = x.cross(v).normalize_or_zero();
    let motion = x * drag.x + y * drag.y;
    if motion == Vec3::ZERO {
        return None;
    }
    Some(Motion::new(motion, motion))
}
