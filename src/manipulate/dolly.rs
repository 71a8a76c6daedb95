use glam::{Vec2, Vec3};

use super::Motion;
use crate::camera::Camera;
use crate::options::ManipulationOptions;

/// Move along the view axis by `drag.x + drag.y` pixels.
///
/// The default motion is exponential in the eye-target distance, so the
/// eye slows down near the target and never passes it. With `linear` eye
/// and target move together, which gets a camera unstuck once it is very
/// close to its target.
pub(super) fn dolly(
    drag: Vec2,
    linear: bool,
    camera: &Camera,
    options: &ManipulationOptions,
) -> Option<Motion> {
    if drag == Vec2::ZERO {
        return None;
    }

    let distance = (drag.x + drag.y) * options.dolly_scale();
    let v = camera.from() - camera.target();

    Some(if linear {
        let motion = v * -distance;
        Motion::new(motion, motion)
    } else {
        let factor = (-distance).exp();
        Motion {
            ortho_factor: factor,
            ..Motion::new(v * factor - v, Vec3::ZERO)
        }
    })
}
