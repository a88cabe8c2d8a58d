//! # Mesh Errors
//!
//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Geometry parameters that cannot form a valid solid.
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// An internal computation left its expected domain. This is a
    /// programming error, not a recoverable condition.
    #[error("geometry invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}
