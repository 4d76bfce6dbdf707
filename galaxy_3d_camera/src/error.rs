//! Error types for the Galaxy3D camera subsystem
//!
//! The per-frame camera pipeline never fails. Errors only come from the
//! configuration surface: building a camera from a config, or resizing it
//! to a new viewport.

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Projection parameters cannot produce a valid perspective (FOV, near, far)
    InvalidProjection(String),

    /// Viewport dimensions cannot produce an aspect ratio
    InvalidViewport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
