// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera, ray-picking, and throttled-redraw core for off-screen particle
//! scene viewers.
//!
//! Orbview is the in-process heart of a notebook-embedded sphere/particle
//! viewer: an orbit camera, NDC-to-world ray unprojection with analytic
//! ray-sphere picking, a drag/zoom input state machine, and a leaky-bucket
//! redraw throttle. It produces matrices, instance data, and pick results;
//! it never touches a GPU. The actual instanced draw calls and pixel
//! presentation happen behind the [`render`] seams, implemented by the
//! hosting application.
//!
//! # Key entry points
//!
//! - [`scene::ParticleScene`] - the composition root driving camera,
//!   picking, and redraw policy from input events
//! - [`camera::core::Camera`] - view/projection construction, free-look and
//!   orbit placement
//! - [`picking`] - ray unprojection and the nearest-sphere pick scan
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Conventions
//!
//! All matrices are `glam` column-major with OpenGL clip space (NDC z in
//! [-1, 1], via `Mat4::perspective_rh_gl`). Device pixel coordinates have
//! their origin at the top-left; [`picking::ndc_from_pixels`] performs the
//! y-flip into NDC.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod render;
pub mod scene;
pub mod util;
