//! Camera system for off-screen 3D scene viewing.
//!
//! Provides a validated perspective camera with free-look and orbit
//! placement, plus an orbit controller that turns drag/zoom deltas into
//! clamped yaw/pitch/radius state.

/// Orbit controller managing yaw/pitch/radius around a focus center.
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;
