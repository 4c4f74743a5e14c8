//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbview crate.
#[derive(Debug)]
pub enum OrbviewError {
    /// Invalid camera or orbit parameters.
    Camera(String),
    /// Off-screen context acquisition/backend failure.
    Context(String),
    /// Renderer or display-surface failure.
    Render(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OrbviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera(msg) => write!(f, "camera error: {msg}"),
            Self::Context(msg) => write!(f, "context error: {msg}"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OrbviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
