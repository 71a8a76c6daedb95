//! Geometric primitives used by the camera fit: bounding boxes, planes,
//! lines and corner queries.

/// Axis-aligned bounding box.
pub mod bounds;
/// Planes, lines and their intersections.
pub mod plane;

pub use bounds::BoundingBox;
use glam::Vec3;
pub use plane::{closest_points_on_lines, intersect_planes, Plane, Ray};

/// Whether `corners[index]` is extremal along `direction`: no other corner
/// lies strictly further along it.
///
/// Several corners can satisfy this at once (a face or edge of the box
/// perpendicular to `direction`). Callers that need a single corner take
/// the first index that passes, see [`outermost_corner`].
#[must_use]
pub fn is_outermost_corner_in_direction(
    corners: &[Vec3; 8],
    index: usize,
    direction: Vec3,
) -> bool {
    let Some(point) = corners.get(index) else {
        return false;
    };
    corners
        .iter()
        .enumerate()
        .all(|(j, other)| {
            j == index || direction.dot(*other - *point) <= 0.0
        })
}

/// Lowest-index corner that is extremal along `direction`.
///
/// Ties are broken by corner index order. Returns `None` only if every
/// comparison is NaN.
#[must_use]
pub fn outermost_corner(
    corners: &[Vec3; 8],
    direction: Vec3,
) -> Option<usize> {
    (0..corners.len())
        .find(|&i| is_outermost_corner_in_direction(corners, i, direction))
}
