//! # Mesh Errors
//!
//! Error types for mesh generation operations. The crescent builder itself
//! never fails; these cover the validated primitives and `Mesh::check_topology`.
//! Ray construction reuses `DegenerateGeometry`.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
