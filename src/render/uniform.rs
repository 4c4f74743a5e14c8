use glam::{Mat4, Vec3, Vec4};

use crate::options::LightingOptions;

/// Statically-tagged uniform value.
///
/// The renderer dispatches on the variant instead of inspecting runtime
/// types, so passing a matrix where the shader expects a vector is a
/// compile-time mismatch rather than a silent GL error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar float uniform.
    Float(f32),
    /// Scalar integer uniform (also used for booleans).
    Int(i32),
    /// 3-component vector uniform.
    Vec3([f32; 3]),
    /// 4-component vector uniform.
    Vec4([f32; 4]),
    /// Column-major 4x4 matrix uniform.
    Mat4([[f32; 4]; 4]),
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for UniformValue {
    fn from(v: bool) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v.to_array())
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        Self::Vec4(v.to_array())
    }
}

impl From<Mat4> for UniformValue {
    fn from(m: Mat4) -> Self {
        Self::Mat4(m.to_cols_array_2d())
    }
}

/// Light and material uniforms for the sphere shader, plus the frame
/// clear color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingUniforms {
    /// World-space light position.
    pub light_pos: [f32; 3],
    /// Light color.
    pub light_color: [f32; 3],
    /// Base material color for unselected spheres.
    pub material_color: [f32; 3],
    /// Framebuffer clear color (RGBA).
    pub clear_color: [f32; 4],
}

impl LightingUniforms {
    /// Build the uniform set from lighting options.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            light_pos: options.light_pos,
            light_color: options.light_color,
            material_color: options.material_color,
            clear_color: options.clear_color,
        }
    }

    /// Enumerate the shader uniforms as (name, tagged value) pairs.
    ///
    /// The clear color is not a uniform and is intentionally absent.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, UniformValue); 3] {
        [
            ("lightPos", UniformValue::Vec3(self.light_pos)),
            ("lightColor", UniformValue::Vec3(self.light_color)),
            ("materialColor", UniformValue::Vec3(self.material_color)),
        ]
    }
}

impl Default for LightingUniforms {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}
