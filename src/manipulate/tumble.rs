use glam::{Vec2, Vec3};

use super::trackball::trackball;
use super::Motion;
use crate::camera::Camera;
use crate::options::ManipulationOptions;

/// Orbit the eye around the target with a virtual trackball.
pub(super) fn tumble(
    drag: Vec2,
    camera: &Camera,
    options: &ManipulationOptions,
) -> Option<Motion> {
    let drag = drag * options.tumble_scale();
    if drag == Vec2::ZERO {
        return None;
    }

    let v = camera.from() - camera.target();
    let up = camera.up();
    // Screen y grows downward.
    let q = trackball(drag.x, -drag.y, v, camera.basis_up(), camera.right());

    Some(Motion {
        up: q * up - up,
        ..Motion::new(q * v - v, Vec3::ZERO)
    })
}
