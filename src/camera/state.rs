//! Plain-numeric camera snapshot for persistence layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::core::{Camera, ProjectionMode};
use crate::error::CamframeError;

/// Persistable camera fields. Vectors are plain `[x, y, z]` arrays and the
/// projection is its integer id, so any document format can carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Eye position.
    pub eye: [f32; 3],
    /// Look-at target.
    pub target: [f32; 3],
    /// Up vector.
    pub up: [f32; 3],
    /// Projection id, see [`ProjectionMode::persist_id`].
    pub projection: u32,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Orthographic half-height.
    pub ortho_scale: f32,
}

impl Camera {
    /// Snapshot the persistable fields.
    #[must_use]
    pub fn state(&self) -> CameraState {
        CameraState {
            eye: self.from().to_array(),
            target: self.target().to_array(),
            up: self.up().to_array(),
            projection: self.projection.persist_id(),
            fov_y: self.fov_v,
            ortho_scale: self.ortho_scale,
        }
    }

    /// Restore persisted fields onto this camera, validating them first.
    /// On error the camera is unchanged.
    pub fn restore_state(
        &mut self,
        state: &CameraState,
    ) -> Result<(), CamframeError> {
        let invalid = |msg: String| Err(CamframeError::InvalidState(msg));

        let Some(projection) = ProjectionMode::from_persist_id(state.projection)
        else {
            return invalid(format!(
                "unknown projection id {}",
                state.projection
            ));
        };

        let eye = Vec3::from_array(state.eye);
        let target = Vec3::from_array(state.target);
        let up = Vec3::from_array(state.up);
        if !(eye.is_finite() && target.is_finite() && up.is_finite()) {
            return invalid("non-finite vector".to_owned());
        }
        if eye == target {
            return invalid("eye equals target".to_owned());
        }
        if up.cross(eye - target).length_squared() == 0.0 {
            return invalid("up is parallel to the view direction".to_owned());
        }
        if state.ortho_scale.is_nan() || state.ortho_scale <= 0.0 {
            return invalid(format!(
                "ortho scale {} must be positive",
                state.ortho_scale
            ));
        }

        self.projection = projection;
        self.fov_v = state.fov_y;
        self.ortho_scale = state.ortho_scale;
        self.look_at(eye, target, up);
        Ok(())
    }
}
