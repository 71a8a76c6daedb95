use glam::{Quat, Vec2, Vec3};

use super::Motion;
use crate::camera::Camera;
use crate::options::ManipulationOptions;

/// Rotate the up vector around the view axis by the horizontal drag.
pub(super) fn roll(
    drag: Vec2,
    camera: &Camera,
    options: &ManipulationOptions,
) -> Option<Motion> {
    if drag == Vec2::ZERO {
        return None;
    }

    let angle = drag.x * options.roll_scale();
    let axis = (camera.from() - camera.target()).normalize_or_zero();
    let up = camera.up();
    let rotated_up = Quat::from_axis_angle(axis, angle) * up;

    Some(Motion {
        up: rotated_up - up,
        ..Motion::new(Vec3::ZERO, Vec3::ZERO)
    })
}
