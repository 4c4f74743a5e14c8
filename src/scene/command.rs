use glam::Vec2;

/// Discrete state-changing commands produced by the input layer.
///
/// Every command mutates scene/camera state unconditionally when executed;
/// whether the execution also triggers a visual refresh is decided by the
/// scene's redraw throttle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Orbit the camera by a cursor drag delta in pixels.
    RotateCamera {
        /// Drag delta since the last cursor position.
        delta: Vec2,
    },
    /// Zoom by a wheel delta (positive moves the eye outward).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Cursor hover at device pixel coordinates; probes picking when
    /// selection is enabled.
    Hover {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
}
