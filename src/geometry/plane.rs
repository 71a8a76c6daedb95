//! Planes, lines and the two intersection queries the fit algorithm needs.

use glam::Vec3;

/// A plane `dot(normal, p) = d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset along the normal (`dot(normal, p)` for any point on
    /// the plane).
    pub d: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`. The normal is
    /// normalized; a zero normal yields a zero plane.
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            d: normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane.
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }
}

/// An infinite line through `origin` along `direction` (not necessarily
/// unit length).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// A point on the line.
    pub origin: Vec3,
    /// Line direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a line.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the line.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Line where two planes meet.
///
/// Returns `None` for parallel planes, where the cross product of the
/// normals has zero length.
#[must_use]
pub fn intersect_planes(p1: &Plane, p2: &Plane) -> Option<Ray> {
    let direction = p1.normal.cross(p2.normal);
    let det = direction.length_squared();
    if det == 0.0 {
        return None;
    }

    // Offsets are stored as `dot(n, p)`, hence n2 x dir and dir x n1.
    let origin = (p2.normal.cross(direction) * p1.d
        + direction.cross(p1.normal) * p2.d)
        / det;
    Some(Ray { origin, direction })
}

/// Closest pair of points between two lines, one on each.
///
/// Solves the 2x2 system built from the direction dot products. Returns
/// `None` when its determinant is exactly zero, i.e. the lines are parallel
/// (or a direction is zero).
#[must_use]
pub fn closest_points_on_lines(a: &Ray, b: &Ray) -> Option<(Vec3, Vec3)> {
    let aa = a.direction.dot(a.direction);
    let ab = a.direction.dot(b.direction);
    let bb = b.direction.dot(b.direction);

    let det = aa * bb - ab * ab;
    if det == 0.0 {
        return None;
    }

    let r = a.origin - b.origin;
    let c = a.direction.dot(r);
    let f = b.direction.dot(r);

    let s = (ab * f - c * bb) / det;
    let t = (aa * f - c * ab) / det;

    Some((a.at(s), b.at(t)))
}
