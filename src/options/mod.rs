//! Centralized scene/display options with TOML preset support.
//!
//! All tweakable settings (camera motion, lighting/material colors, display
//! toggles) are consolidated here. Options serialize to/from TOML for view
//! presets, and export a JSON Schema for a frontend options panel.

mod camera;
mod display;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Light and material colors.
    pub lighting: LightingOptions,
    /// Viewport size and interaction toggles.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Io`] when the file cannot be read and
    /// [`OrbviewError::OptionsParse`] when it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrbviewError> {
        let content =
            std::fs::read_to_string(path).map_err(OrbviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::OptionsParse`] on serialization failure and
    /// [`OrbviewError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrbviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbviewError::Io)
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
