//! Small shared utilities.

/// Throttled-redraw policy.
pub mod redraw;
