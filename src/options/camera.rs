use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{ProjectionMode, DEFAULT_ORTHO_SCALE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial projection parameters for a new camera.
pub struct CameraOptions {
    /// Projection mode.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 10.0, max = 120.0),
        extend("step" = 1.0)
    )]
    pub fov_v: f32,
    /// Orthographic half-height in world units.
    #[schemars(
        title = "Ortho Scale",
        range(min = 0.01, max = 100.0),
        extend("step" = 0.01)
    )]
    pub ortho_scale: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Perspective,
            fov_v: 55.0,
            ortho_scale: DEFAULT_ORTHO_SCALE,
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}
