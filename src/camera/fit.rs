//! Frame a bounding box by moving the camera along its current view
//! direction.
//!
//! The perspective solve places the eye where the box touches all four
//! side planes of the frustum: each side plane is pushed out until it
//! rests on the box corner that is outermost along its normal, the
//! left/right planes then meet in a line of eye positions that fit the box
//! horizontally and the top/bottom planes in a line that fits it
//! vertically. The eye goes to whichever end of the closest-point segment
//! between those lines lies farther back, so both directions fit.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use super::core::{Camera, ProjectionMode};
use crate::geometry::{
    closest_points_on_lines, intersect_planes, outermost_corner, BoundingBox,
    Plane,
};

/// Camera placement that frames a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// New eye position.
    pub position: Vec3,
    /// New target, the box center.
    pub target: Vec3,
    /// New orthographic half-height (orthographic cameras only).
    pub ortho_scale: Option<f32>,
}

/// Compute the camera placement that tightly frames `bbox` from the
/// camera's current viewing direction.
///
/// Returns `None` when no sensible placement exists (degenerate box,
/// parallel planes or lines in the solve, non-finite result); the camera
/// should then stay where it is.
#[must_use]
pub fn compute_fit_to_bounds(
    camera: &Camera,
    bbox: &BoundingBox,
) -> Option<FitResult> {
    if bbox.is_degenerate() {
        return None;
    }

    let target = bbox.center();
    let (position, ortho_scale) = match camera.projection {
        ProjectionMode::Orthographic => {
            let (position, scale) = fit_orthographic(camera, bbox)?;
            (position, Some(scale))
        }
        ProjectionMode::Perspective => (fit_perspective(camera, bbox)?, None),
    };

    let offset = position - target;
    if !position.is_finite() || offset.dot(camera.backward()) <= 0.0 {
        return None;
    }

    Some(FitResult {
        position,
        target,
        ortho_scale,
    })
}

/// [`compute_fit_to_bounds`] on the box grown by `padding` on every side.
#[must_use]
pub fn compute_fit_to_bounds_padded(
    camera: &Camera,
    bbox: &BoundingBox,
    padding: f32,
) -> Option<FitResult> {
    if padding == 0.0 {
        compute_fit_to_bounds(camera, bbox)
    } else {
        compute_fit_to_bounds(camera, &bbox.extend(padding))
    }
}

fn fit_orthographic(
    camera: &Camera,
    bbox: &BoundingBox,
) -> Option<(Vec3, f32)> {
    let view = camera.view_matrix();
    let (min, max) = bbox
        .corners()
        .iter()
        .map(|c| view.transform_point3(*c))
        .fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), p| (lo.min(p), hi.max(p)),
        );

    let new_scale = (max.y - min.y).max((max.x - min.x) / camera.aspect) * 0.5;
    if new_scale.is_nan() || new_scale <= 0.0 || camera.ortho_scale <= 0.0 {
        return None;
    }

    // Keep distance proportional to ortho scale so a later switch to
    // perspective shows a similar framing.
    let new_distance = camera.distance() * new_scale / camera.ortho_scale;
    Some((bbox.center() + camera.backward() * new_distance, new_scale))
}

fn fit_perspective(camera: &Camera, bbox: &BoundingBox) -> Option<Vec3> {
    let (right, up, forward) = camera.frame();
    let half_v = camera.half_fov_v_radians();
    let half_h = camera.horizontal_fov_radians() * 0.5;

    // Outward normals of the four side planes.
    let side = |axis: Vec3, half: f32| {
        Quat::from_axis_angle(axis, FRAC_PI_2 + half) * forward
    };
    let top_normal = side(right, half_v);
    let bottom_normal = side(-right, half_v);
    let left_normal = side(up, half_h);
    let right_normal = side(-up, half_h);

    let corners = bbox.corners();
    let plane_on_box = |normal: Vec3| {
        outermost_corner(&corners, normal)
            .map(|i| Plane::from_normal_and_point(normal, corners[i]))
    };

    let horizontal = intersect_planes(
        &plane_on_box(left_normal)?,
        &plane_on_box(right_normal)?,
    )?;
    let vertical = intersect_planes(
        &plane_on_box(top_normal)?,
        &plane_on_box(bottom_normal)?,
    )?;
    let (a, b) = closest_points_on_lines(&horizontal, &vertical)?;

    Some(if (a - b).dot(forward) < 0.0 { a } else { b })
}

impl Camera {
    /// Commit a fit: move eye and target, and take over the new ortho scale
    /// if there is one.
    pub fn apply_fit(&mut self, fit: &FitResult) {
        if let Some(scale) = fit.ortho_scale {
            self.ortho_scale = scale;
        }
        let up = self.up();
        self.look_at(fit.position, fit.target, up);
    }

    /// Frame `bbox` from the current viewing direction. Returns whether the
    /// camera moved; a box that cannot be framed leaves it unchanged.
    pub fn frame_bounds(&mut self, bbox: &BoundingBox) -> bool {
        if let Some(fit) = compute_fit_to_bounds(self, bbox) {
            log::debug!(
                "framed bounds {:?}..{:?}: from={} target={}",
                bbox.min,
                bbox.max,
                fit.position,
                fit.target
            );
            self.apply_fit(&fit);
            true
        } else {
            log::warn!(
                "cannot frame bounds {:?}..{:?}, camera unchanged",
                bbox.min,
                bbox.max
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::NEG_ONE, Vec3::ONE)
    }

    fn assert_fit_position(fit: &FitResult, expected: Vec3) {
        assert!(
            fit.position.abs_diff_eq(expected, 1e-4),
            "{} != {expected}",
            fit.position
        );
    }

    fn perspective(fov_v: f32, aspect: f32) -> Camera {
        let mut camera = Camera::default();
        camera.fov_v = fov_v;
        camera.aspect = aspect;
        camera
    }

    #[test]
    fn orthographic_scale_matches_half_extent() {
        for distance in [0.5, 5.0, 40.0] {
            let mut camera = Camera::default();
            camera.projection = ProjectionMode::Orthographic;
            camera.aspect = 1.0;
            camera.look_at(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y);

            let fit = compute_fit_to_bounds(&camera, &unit_box()).unwrap();
            let scale = fit.ortho_scale.unwrap();
            assert!(
                (scale - 1.0).abs() < 1e-5,
                "distance {distance}: scale {scale}"
            );

            camera.apply_fit(&fit);
            assert!((camera.ortho_scale - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn orthographic_keeps_distance_to_scale_ratio() {
        let mut camera = Camera::default();
        camera.projection = ProjectionMode::Orthographic;
        camera.aspect = 2.0;
        camera.ortho_scale = 0.5;
        // distance 5, ratio 10
        let bbox = BoundingBox::new(
            Vec3::new(-4.0, -1.0, -1.0),
            Vec3::new(4.0, 1.0, 1.0),
        );
        let fit = compute_fit_to_bounds(&camera, &bbox).unwrap();
        // width 8 / aspect 2 = 4 > height 2
        assert!((fit.ortho_scale.unwrap() - 2.0).abs() < 1e-5);
        assert!(fit.position.abs_diff_eq(Vec3::new(0.0, 0.0, 20.0), 1e-4));
    }

    #[test]
    fn perspective_cube_square_viewport() {
        let camera = perspective(90.0, 1.0);
        let fit = compute_fit_to_bounds(&camera, &unit_box()).unwrap();
        assert_fit_position(&fit, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(fit.target, Vec3::ZERO);
        assert!(fit.ortho_scale.is_none());
    }

    #[test]
    fn perspective_wide_viewport_is_height_limited() {
        let camera = perspective(90.0, 2.0);
        let fit = compute_fit_to_bounds(&camera, &unit_box()).unwrap();
        assert_fit_position(&fit, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn perspective_tall_viewport_is_width_limited() {
        // aspect 0.5 at 90deg vertical: tan(half_h) = 0.5, so the front face
        // needs distance 2 from the eye.
        let camera = perspective(90.0, 0.5);
        let fit = compute_fit_to_bounds(&camera, &unit_box()).unwrap();
        assert_fit_position(&fit, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn fit_does_not_depend_on_starting_distance() {
        let near = perspective(60.0, 1.5);
        let mut far = near.clone();
        far.set_from(Vec3::new(0.0, 0.0, 80.0));
        let a = compute_fit_to_bounds(&near, &unit_box()).unwrap();
        let b = compute_fit_to_bounds(&far, &unit_box()).unwrap();
        assert!(a.position.abs_diff_eq(b.position, 1e-4));
    }

    #[test]
    fn fitted_box_touches_frustum() {
        let mut camera = perspective(50.0, 1.6);
        camera.look_at(Vec3::new(3.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y);
        let bbox = BoundingBox::new(
            Vec3::new(-2.0, -0.5, -1.0),
            Vec3::new(1.0, 1.5, 0.5),
        );
        let fit = compute_fit_to_bounds(&camera, &bbox).unwrap();

        // Seen from the fitted eye with the starting orientation, every
        // corner lands inside NDC and the limiting pair reaches the edges.
        let (_, up, forward) = camera.frame();
        let view =
            glam::Mat4::look_at_rh(fit.position, fit.position + forward, up);
        let vp = camera.proj_matrix() * view;
        let mut max_ndc = 0.0_f32;
        for corner in bbox.corners() {
            let ndc = vp.project_point3(corner);
            max_ndc = max_ndc.max(ndc.x.abs()).max(ndc.y.abs());
        }
        assert!(max_ndc <= 1.0 + 1e-3, "box clipped: {max_ndc}");
        assert!(max_ndc > 1.0 - 1e-3, "box not tight: {max_ndc}");
        let frustum = crate::camera::Frustum::from_view_projection(vp);
        assert!(frustum.contains_box(&bbox, 1e-3));

        assert!(camera.frame_bounds(&bbox));
        assert!(camera.from().abs_diff_eq(fit.position, 1e-6));
        assert_eq!(camera.target(), bbox.center());
    }

    #[test]
    fn off_center_box_moves_target() {
        let mut camera = perspective(90.0, 1.0);
        camera.look_at(
            Vec3::new(5.0, 0.0, 9.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::Y,
        );
        let bbox = BoundingBox::new(
            Vec3::new(4.0, -1.0, -1.0),
            Vec3::new(6.0, 1.0, 1.0),
        );
        let fit = compute_fit_to_bounds(&camera, &bbox).unwrap();
        assert_eq!(fit.target, Vec3::new(5.0, 0.0, 0.0));
        assert!(fit.position.abs_diff_eq(Vec3::new(5.0, 0.0, 2.0), 1e-4));
    }

    #[test]
    fn padding_pushes_camera_back() {
        let camera = perspective(90.0, 1.0);
        let fit =
            compute_fit_to_bounds_padded(&camera, &unit_box(), 1.0).unwrap();
        // box [-2, 2]: front face at 2, half-height 2 at 45deg
        assert!(fit.position.abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-4));
    }

    #[test]
    fn degenerate_box_is_a_no_op() {
        let point = BoundingBox::new(Vec3::ONE, Vec3::ONE);
        for projection in
            [ProjectionMode::Perspective, ProjectionMode::Orthographic]
        {
            let mut camera = Camera::default();
            camera.projection = projection;
            assert!(compute_fit_to_bounds(&camera, &point).is_none());

            let before = camera.clone();
            assert!(!camera.frame_bounds(&point));
            assert_eq!(camera, before);
        }
    }
}
