use glam::{Mat4, Vec3};

use crate::error::OrbviewError;

/// Perspective camera defined by eye position, look target, and projection
/// parameters.
///
/// Two mutually exclusive control modes update the eye/target pair:
/// [`set_rotation`](Self::set_rotation) (free look: the target is derived
/// from the eye) and [`orbit`](Self::orbit) (the eye is placed on a sphere
/// around the target). Projection parameters are validated at construction,
/// so every camera can always produce finite matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fovy: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    yaw: f32,
    pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        // Centered view of a unit-scale scene from distance 20.
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 500.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Camera {
    /// Create a camera, rejecting degenerate projection parameters.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Camera`] when `fovy` is outside (0, 180),
    /// `aspect <= 0`, the near/far planes do not satisfy `0 < znear < zfar`,
    /// `up` is zero-length, or any input is non-finite.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Result<Self, OrbviewError> {
        if !position.is_finite() || !target.is_finite() || !up.is_finite() {
            return Err(OrbviewError::Camera(
                "non-finite position/target/up".to_owned(),
            ));
        }
        if up.length_squared() <= f32::EPSILON {
            return Err(OrbviewError::Camera(
                "up vector must be non-zero".to_owned(),
            ));
        }
        if !fovy.is_finite() || fovy <= 0.0 || fovy >= 180.0 {
            return Err(OrbviewError::Camera(format!(
                "fovy must be in (0, 180) degrees, got {fovy}"
            )));
        }
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(OrbviewError::Camera(format!(
                "aspect must be positive, got {aspect}"
            )));
        }
        if !znear.is_finite()
            || !zfar.is_finite()
            || znear <= 0.0
            || zfar <= znear
        {
            return Err(OrbviewError::Camera(format!(
                "planes must satisfy 0 < znear < zfar, got {znear}..{zfar}"
            )));
        }
        Ok(Self {
            position,
            target,
            up: up.normalize(),
            fovy,
            aspect,
            znear,
            zfar,
            yaw: 0.0,
            pitch: 0.0,
        })
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target position.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up direction (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// Yaw angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Update the aspect ratio (on viewport resize).
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Camera`] when `aspect` is non-positive or
    /// non-finite.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), OrbviewError> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(OrbviewError::Camera(format!(
                "aspect must be positive, got {aspect}"
            )));
        }
        self.aspect = aspect;
        Ok(())
    }

    /// Unit direction vector for the given pitch/yaw in degrees.
    fn direction(pitch: f32, yaw: f32) -> Vec3 {
        let yaw_rad = yaw.to_radians();
        let pitch_rad = pitch.to_radians();
        Vec3::new(
            pitch_rad.cos() * yaw_rad.cos(),
            pitch_rad.sin(),
            pitch_rad.cos() * yaw_rad.sin(),
        )
        .normalize()
    }

    /// Free-look rotation: keep the eye fixed and re-derive the target from
    /// the spherical direction of `pitch`/`yaw` (degrees).
    ///
    /// Callers are expected to clamp pitch to [-89, 89] to stay clear of
    /// the gimbal poles.
    pub fn set_rotation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch;
        self.yaw = yaw;
        self.target = self.position + Self::direction(pitch, yaw);
    }

    /// Orbit placement: put the eye on a sphere of `radius` around `center`
    /// and look at `center`.
    ///
    /// `pitch`/`yaw` (degrees) update the stored angles when given. This is
    /// the only operation that moves the eye under mouse drag/zoom; after it
    /// returns, [`view_matrix`](Self::view_matrix) looks from the new
    /// position directly at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Camera`] when `radius` is non-positive or
    /// non-finite, or `center` or either angle is non-finite.
    pub fn orbit(
        &mut self,
        center: Vec3,
        radius: f32,
        pitch: Option<f32>,
        yaw: Option<f32>,
    ) -> Result<(), OrbviewError> {
        if !center.is_finite() {
            return Err(OrbviewError::Camera(
                "non-finite orbit center".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(OrbviewError::Camera(format!(
                "orbit radius must be positive, got {radius}"
            )));
        }
        if pitch.is_some_and(|p| !p.is_finite())
            || yaw.is_some_and(|y| !y.is_finite())
        {
            return Err(OrbviewError::Camera(format!(
                "orbit angles must be finite, got pitch {pitch:?} yaw {yaw:?}"
            )));
        }
        if let Some(p) = pitch {
            self.pitch = p;
        }
        if let Some(y) = yaw {
            self.yaw = y;
        }
        self.position =
            center + radius * Self::direction(self.pitch, self.yaw);
        self.target = center;
        Ok(())
    }

    /// Right-handed look-at view matrix for the current state.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Perspective projection matrix with OpenGL clip space (NDC z in
    /// [-1, 1]).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined `projection * view` matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU-uploadable camera state for the external renderer.
///
/// Matrices are column-major (`glam` layout); the renderer must use the
/// same convention in its shaders — no transposes anywhere.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera world-space position (for lighting).
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Currently picked instance index (-1 if none).
    pub selected: i32,
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a camera uniform with identity matrices and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            selected: -1,
            aspect: 1.0,
            _pad: [0.0; 2],
        }
    }

    /// Update all fields from the given camera and selection index.
    pub fn update_view_proj(&mut self, camera: &Camera, selected: i32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.proj = camera.projection_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.fovy();
        self.selected = selected;
        self.aspect = camera.aspect();
    }
}
