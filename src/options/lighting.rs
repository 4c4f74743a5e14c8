use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Light and material colors for the sphere shader.
pub struct LightingOptions {
    /// World-space light position.
    pub light_pos: [f32; 3],
    /// Light color.
    pub light_color: [f32; 3],
    /// Base material color for unselected spheres.
    pub material_color: [f32; 3],
    /// Framebuffer clear color (RGBA).
    pub clear_color: [f32; 4],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_pos: [50.0, 50.0, 100.0],
            light_color: [1.0, 1.0, 1.0],
            material_color: [0.8, 0.2, 0.2],
            clear_color: [0.8, 0.8, 0.8, 1.0],
        }
    }
}
