use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::error::OrbviewError;
use crate::options::CameraOptions;

/// Pitch clamp in degrees, keeping the orbit away from the gimbal poles.
const PITCH_LIMIT: f32 = 89.0;
/// Minimum orbit radius in world units.
const MIN_RADIUS: f32 = 1.0;

/// Orbit-camera controller: yaw/pitch/radius around a focus center.
///
/// All state updates are unconditional — the redraw throttle lives in the
/// scene layer, so the camera never misses a drag or zoom delta even when
/// the visual refresh is skipped.
#[derive(Debug, Clone)]
pub struct OrbitController {
    camera: Camera,
    center: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    rotate_speed: f32,
    zoom_speed: f32,
}

impl OrbitController {
    /// Create a controller around `camera`, seeded from `options` and
    /// centered on the origin.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Camera`] when the initial orbit parameters
    /// are rejected (non-finite angles from a corrupt options file).
    pub fn new(
        camera: Camera,
        options: &CameraOptions,
    ) -> Result<Self, OrbviewError> {
        let mut controller = Self {
            camera,
            center: Vec3::ZERO,
            radius: options.radius.max(MIN_RADIUS),
            yaw: options.yaw,
            pitch: options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
        };
        controller.sync()?;
        Ok(controller)
    }

    /// Re-place the camera from the current orbit state.
    fn sync(&mut self) -> Result<(), OrbviewError> {
        self.camera.orbit(
            self.center,
            self.radius,
            Some(self.pitch),
            Some(self.yaw),
        )
    }

    /// Infallible re-place: radius and pitch are clamped by every mutator,
    /// so a rejection here only happens on non-finite input deltas.
    fn apply(&mut self) {
        if let Err(e) = self.sync() {
            log::warn!("orbit update rejected: {e}");
        }
    }

    /// The camera being driven.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current orbit center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Current orbit radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, always within [-89, 89].
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a drag delta in pixels: yaw follows x, pitch follows y and is
    /// clamped to [-89, 89].
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.rotate_speed;
        self.pitch = (self.pitch + delta.y * self.rotate_speed)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.apply();
    }

    /// Apply a wheel delta: positive moves the eye outward. The radius is
    /// clamped to at least 1.0.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta * self.zoom_speed).max(MIN_RADIUS);
        self.apply();
    }

    /// Re-center the orbit on the centroid of `positions` (the origin when
    /// empty) and re-place the camera.
    pub fn focus_on(&mut self, positions: &[Vec3]) {
        self.center = if positions.is_empty() {
            Vec3::ZERO
        } else {
            positions.iter().copied().sum::<Vec3>()
                / positions.len() as f32
        };
        self.apply();
    }

    /// Update the camera aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        if let Err(e) =
            self.camera.set_aspect(width as f32 / height as f32)
        {
            log::warn!("resize rejected: {e}");
        }
    }
}
