//! Camera and manipulation settings with TOML preset support.
//!
//! Options serialize to/from TOML so a viewer can keep named setting
//! presets on disk. Every section uses `#[serde(default)]`, so a partial
//! file (e.g. only overriding `[manipulation]`) works.

mod camera;
mod manipulation;

use std::path::Path;

pub use camera::CameraOptions;
pub use manipulation::ManipulationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CamframeError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection parameters for new cameras.
    pub camera: CameraOptions,
    /// Drag sensitivity of the interactive manipulator.
    pub manipulation: ManipulationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// Manipulation constants that are zero, negative or not finite are
    /// rejected with [`CamframeError::OptionsParse`].
    pub fn load(path: &Path) -> Result<Self, CamframeError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| CamframeError::OptionsParse(e.to_string()))?;
        options.manipulation.validate()?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamframeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamframeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
