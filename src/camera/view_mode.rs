//! Canonical view presets.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::core::{Camera, ProjectionMode, DEFAULT_ORTHO_SCALE};

/// Eye distance used by every preset in orthographic mode, where distance
/// does not affect the image.
const ORTHO_PRESET_DISTANCE: f32 = 2.0;

/// A canonical camera placement relative to the scene bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Keep the current placement.
    User,
    /// Eye on +Z.
    Front,
    /// Eye on -Z.
    Back,
    /// Eye on +X.
    Left,
    /// Eye on -X.
    Right,
    /// Eye on +Y.
    Top,
    /// Eye on -Y.
    Bottom,
    /// Eye at `(+d, +d, -d)`.
    IsometricFrontLeftTop,
    /// Eye at `(-d, +d, -d)`.
    IsometricFrontRightTop,
    /// Eye at `(+d, -d, -d)`.
    IsometricFrontLeftBottom,
    /// Eye at `(-d, -d, -d)`.
    IsometricFrontRightBottom,
    /// Eye at `(+d, +d, +d)`.
    IsometricBackLeftTop,
    /// Eye at `(-d, +d, +d)`.
    IsometricBackRightTop,
    /// Eye at `(+d, -d, +d)`.
    IsometricBackLeftBottom,
    /// Eye at `(-d, -d, +d)`.
    IsometricBackRightBottom,
}

impl ViewMode {
    /// Every preset that moves the camera, i.e. all but [`ViewMode::User`].
    pub const ALL: [Self; 14] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::IsometricFrontLeftTop,
        Self::IsometricFrontRightTop,
        Self::IsometricFrontLeftBottom,
        Self::IsometricFrontRightBottom,
        Self::IsometricBackLeftTop,
        Self::IsometricBackRightTop,
        Self::IsometricBackLeftBottom,
        Self::IsometricBackRightBottom,
    ];

    /// Unit-magnitude eye offset direction (per axis in {-1, 0, 1}) and
    /// canonical up vector. `None` for [`ViewMode::User`].
    ///
    /// For the isometric corners the canonical up is not orthogonal to the
    /// offset; [`Camera::set_view_mode`] projects it onto the image plane.
    #[must_use]
    pub const fn placement(self) -> Option<(Vec3, Vec3)> {
        let placement = match self {
            Self::User => return None,
            Self::Front => (Vec3::Z, Vec3::Y),
            Self::Back => (Vec3::NEG_Z, Vec3::Y),
            Self::Left => (Vec3::X, Vec3::Z),
            Self::Right => (Vec3::NEG_X, Vec3::Z),
            Self::Top => (Vec3::Y, Vec3::Z),
            Self::Bottom => (Vec3::NEG_Y, Vec3::Z),
            Self::IsometricFrontLeftTop => {
                (Vec3::new(1.0, 1.0, -1.0), Vec3::Y)
            }
            Self::IsometricFrontRightTop => {
                (Vec3::new(-1.0, 1.0, -1.0), Vec3::Y)
            }
            Self::IsometricFrontLeftBottom => {
                (Vec3::new(1.0, -1.0, -1.0), Vec3::Y)
            }
            Self::IsometricFrontRightBottom => {
                (Vec3::new(-1.0, -1.0, -1.0), Vec3::Y)
            }
            Self::IsometricBackLeftTop => (Vec3::new(1.0, 1.0, 1.0), Vec3::Y),
            Self::IsometricBackRightTop => {
                (Vec3::new(-1.0, 1.0, 1.0), Vec3::Y)
            }
            Self::IsometricBackLeftBottom => {
                (Vec3::new(1.0, -1.0, 1.0), Vec3::Y)
            }
            Self::IsometricBackRightBottom => {
                (Vec3::new(-1.0, -1.0, 1.0), Vec3::Y)
            }
        };
        Some(placement)
    }

    /// Whether this is one of the 8 corner views.
    #[must_use]
    pub const fn is_isometric(self) -> bool {
        matches!(
            self,
            Self::IsometricFrontLeftTop
                | Self::IsometricFrontRightTop
                | Self::IsometricFrontLeftBottom
                | Self::IsometricFrontRightBottom
                | Self::IsometricBackLeftTop
                | Self::IsometricBackRightTop
                | Self::IsometricBackLeftBottom
                | Self::IsometricBackRightBottom
        )
    }

    /// Stable integer id written by persistence layers.
    #[must_use]
    pub const fn persist_id(self) -> u32 {
        match self {
            Self::User => 0,
            Self::Front => 1,
            Self::Back => 2,
            Self::Left => 3,
            Self::Right => 4,
            Self::Top => 5,
            Self::Bottom => 6,
            Self::IsometricFrontLeftTop => 7,
            Self::IsometricFrontRightTop => 8,
            Self::IsometricFrontLeftBottom => 9,
            Self::IsometricFrontRightBottom => 10,
            Self::IsometricBackLeftTop => 11,
            Self::IsometricBackRightTop => 12,
            Self::IsometricBackLeftBottom => 13,
            Self::IsometricBackRightBottom => 14,
        }
    }

    /// Inverse of [`persist_id`](Self::persist_id).
    #[must_use]
    pub const fn from_persist_id(id: u32) -> Option<Self> {
        let mode = match id {
            0 => Self::User,
            1 => Self::Front,
            2 => Self::Back,
            3 => Self::Left,
            4 => Self::Right,
            5 => Self::Top,
            6 => Self::Bottom,
            7 => Self::IsometricFrontLeftTop,
            8 => Self::IsometricFrontRightTop,
            9 => Self::IsometricFrontLeftBottom,
            10 => Self::IsometricFrontRightBottom,
            11 => Self::IsometricBackLeftTop,
            12 => Self::IsometricBackRightTop,
            13 => Self::IsometricBackLeftBottom,
            14 => Self::IsometricBackRightBottom,
            _ => return None,
        };
        Some(mode)
    }
}

impl Camera {
    /// Eye-to-target distance a preset uses for the current scene bounds.
    #[must_use]
    pub fn preset_distance(&self) -> f32 {
        match self.projection {
            ProjectionMode::Orthographic => ORTHO_PRESET_DISTANCE,
            ProjectionMode::Perspective => {
                self.scene_bounds().diagonal_length() * 0.5
                    / self.half_fov_v_radians().tan()
            }
        }
    }

    /// Place the camera at a canonical view of the scene bounds.
    ///
    /// The target moves to the bounds center, the eye sits `distance` away
    /// along each axis of the preset's offset, and `ortho_scale` resets to
    /// its default. The stored up vector is the preset's canonical up with
    /// its component along the view axis removed, so it stays orthogonal to
    /// `from - target`. [`ViewMode::User`] leaves the camera untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        let Some((offset, up)) = mode.placement() else {
            return;
        };

        let target = self.scene_bounds().center();
        let distance = self.preset_distance();
        if !distance.is_finite() || distance <= 0.0 {
            log::warn!(
                "view preset {mode:?} skipped: scene bounds give distance \
                 {distance}"
            );
            return;
        }
        let axis = offset.normalize();
        let up = (up - axis * up.dot(axis)).normalize();

        self.ortho_scale = DEFAULT_ORTHO_SCALE;
        self.look_at(target + offset * distance, target, up);
        log::debug!(
            "view preset {mode:?}: from={} target={target}",
            self.from()
        );
    }
}
