//! View frustum for containment tests
//!
//! Extracts frustum planes from a view-projection matrix so callers can
//! check whether points or boxes are fully visible.

use glam::{Mat4, Vec3, Vec4};

use super::core::Camera;
use crate::geometry::{BoundingBox, Plane};

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far. Normals
    /// point into the frustum.
    pub planes: [Plane; 6],
}

/// Plane from `ax + by + cz + w = 0` coefficients, normalized.
fn plane_from_coefficients(c: Vec4) -> Plane {
    let normal = c.truncate();
    let len = normal.length();
    if len > 0.0 {
        Plane {
            normal: normal / len,
            d: -c.w / len,
        }
    } else {
        Plane {
            normal: Vec3::ZERO,
            d: 0.0,
        }
    }
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        // [0,1] depth range (wgpu/Vulkan): near plane is just row2
        Self {
            planes: [
                plane_from_coefficients(row3 + row0),
                plane_from_coefficients(row3 - row0),
                plane_from_coefficients(row3 + row1),
                plane_from_coefficients(row3 - row1),
                plane_from_coefficients(row2),
                plane_from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum, allowing `tolerance` world
    /// units outside each plane.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3, tolerance: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= -tolerance)
    }

    /// Test if every corner of a box is inside the frustum.
    #[must_use]
    pub fn contains_box(&self, bbox: &BoundingBox, tolerance: f32) -> bool {
        bbox.corners()
            .iter()
            .all(|corner| self.contains_point(*corner, tolerance))
    }
}

impl Camera {
    /// Frustum of the camera's current view and projection.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_proj_matrix())
    }
}
