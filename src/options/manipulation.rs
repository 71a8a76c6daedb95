use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CamframeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Manipulation", inline)]
#[serde(default)]
/// Pointer-drag sensitivity for the camera manipulation modes.
pub struct ManipulationOptions {
    /// Drag pixels per world unit of dolly.
    #[schemars(
        title = "Dolly Pixels per Unit",
        range(min = 50.0, max = 5000.0),
        extend("step" = 10.0)
    )]
    pub dolly_pixels_per_unit: f32,
    /// Drag pixels per radian of roll.
    #[schemars(
        title = "Roll Pixels per Radian",
        range(min = 50.0, max = 5000.0),
        extend("step" = 10.0)
    )]
    pub roll_pixels_per_radian: f32,
    /// Drag pixels per radian of tumble.
    #[schemars(
        title = "Tumble Pixels per Radian",
        range(min = 50.0, max = 5000.0),
        extend("step" = 10.0)
    )]
    pub tumble_pixels_per_radian: f32,
}

impl ManipulationOptions {
    /// Dolly distance per drag pixel.
    #[must_use]
    pub fn dolly_scale(&self) -> f32 {
        self.dolly_pixels_per_unit.recip()
    }

    /// Roll angle per drag pixel. Negative: dragging right rolls clockwise.
    #[must_use]
    pub fn roll_scale(&self) -> f32 {
        -self.roll_pixels_per_radian.recip()
    }

    /// Tumble angle per drag pixel.
    #[must_use]
    pub fn tumble_scale(&self) -> f32 {
        self.tumble_pixels_per_radian.recip()
    }

    /// Check that every pixel constant is finite and positive.
    ///
    /// A zero constant turns a drag into an infinite (or NaN) motion.
    pub fn validate(&self) -> Result<(), CamframeError> {
        let fields = [
            ("dolly_pixels_per_unit", self.dolly_pixels_per_unit),
            ("roll_pixels_per_radian", self.roll_pixels_per_radian),
            ("tumble_pixels_per_radian", self.tumble_pixels_per_radian),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CamframeError::OptionsParse(format!(
                    "manipulation.{name} must be finite and positive, \
                     got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ManipulationOptions {
    fn default() -> Self {
        Self {
            dolly_pixels_per_unit: 700.0,
            roll_pixels_per_radian: 400.0,
            tumble_pixels_per_radian: 800.0,
        }
    }
}
