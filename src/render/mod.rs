//! Seams to the external rendering collaborators.
//!
//! This crate never touches a GPU. The scene produces matrices, per-frame
//! uniforms, and instance data; the hosting application implements
//! [`SceneRenderer`] (instanced sphere draw + framebuffer readback) and
//! [`DisplaySurface`] (e.g. a notebook canvas). [`context`] provides the
//! acquire-once wrapper around whatever backend creates the hidden
//! off-screen context.

pub mod context;
mod uniform;

use glam::Vec3;

pub use self::context::{OffscreenContext, RenderBackend};
pub use self::uniform::{LightingUniforms, UniformValue};
use crate::camera::core::CameraUniform;
use crate::error::OrbviewError;

/// Per-frame draw parameters handed to a [`SceneRenderer`].
#[derive(Debug, Clone, Copy)]
pub struct FrameParams<'a> {
    /// Camera matrices and metadata.
    pub camera: CameraUniform,
    /// Light and material uniforms.
    pub lighting: LightingUniforms,
    /// Per-instance sphere positions.
    pub positions: &'a [Vec3],
    /// Per-instance sphere colors.
    pub colors: &'a [Vec3],
    /// Index of the picked instance (-1 if none).
    pub selection: i32,
    /// Whether to draw the world-axes overlay.
    pub draw_axes: bool,
}

/// 8-bit RGB pixel buffer, row-major, `height * width * 3` bytes, top row
/// first (not flipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGB bytes, validating the length against the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Render`] when `data.len()` is not exactly
    /// `width * height * 3`.
    pub fn new(
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<Self, OrbviewError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(OrbviewError::Render(format!(
                "pixel buffer is {} bytes, expected {expected} for \
                 {width}x{height} RGB",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Renders one frame of instanced spheres off-screen and reads back the
/// framebuffer.
pub trait SceneRenderer {
    /// Draw the frame and return the resulting pixels.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Render`] when the draw or readback fails.
    fn draw(
        &mut self,
        frame: &FrameParams<'_>,
    ) -> Result<PixelBuffer, OrbviewError>;
}

/// Presents rendered pixels to the hosting display.
pub trait DisplaySurface {
    /// Present a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Render`] when presentation fails.
    fn present(&mut self, pixels: &PixelBuffer) -> Result<(), OrbviewError>;
}
