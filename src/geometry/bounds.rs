use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a box from two corners. The corners are sorted per axis, so
    /// callers may pass them in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the min-to-max diagonal.
    #[must_use]
    pub fn diagonal_length(&self) -> f32 {
        self.extent().length()
    }

    /// The 8 corners. Bit 0 of the index selects max x, bit 1 max y, bit 2
    /// max z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Grow the box by `padding` on every side.
    #[must_use]
    pub fn extend(&self, padding: f32) -> Self {
        let padding = Vec3::splat(padding);
        Self::new(self.min - padding, self.max + padding)
    }

    /// A box with no volume to frame: zero diagonal or non-finite corners.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.min.is_finite()
            || !self.max.is_finite()
            || self.diagonal_length() <= f32::EPSILON
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec3::splat(-1.0),
            max: Vec3::ONE,
        }
    }
}
