//! # Scene Errors

use config::ConfigError;
use crescent_mesh::MeshError;
use thiserror::Error;

/// Errors raised while building or driving a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// No demo is registered under this name.
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    /// Viewport with a zero dimension.
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Camera or tessellation settings were rejected.
    #[error("Invalid viewer settings: {0}")]
    Config(#[from] ConfigError),

    /// Mesh construction failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
