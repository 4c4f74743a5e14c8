use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Viewport size and interaction toggles.
pub struct DisplayOptions {
    /// Viewport width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Viewport height in pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Whether hover picking of particles is enabled.
    #[schemars(title = "Select Particles")]
    pub select_particles: bool,
    /// Whether to draw the world-axes overlay.
    #[schemars(title = "Draw Axes")]
    pub draw_axes: bool,
    /// Redraw rate cap in Hz (<= 0 disables throttling).
    #[schemars(title = "Max Redraw Rate", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub max_redraw_hz: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            select_particles: false,
            draw_axes: false,
            max_redraw_hz: 60.0,
        }
    }
}
