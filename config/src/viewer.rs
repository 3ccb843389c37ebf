//! Validated camera configuration shared by the scene and WASM crates.
//!
//! Each public item documents its purpose with a minimal usage example so
//! downstream crates can stay declarative instead of scattering literals.

use thiserror::Error;

use crate::constants::{DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR, DEFAULT_SEGMENTS};

/// Immutable snapshot of projection and tessellation settings.
///
/// # Examples
/// ```
/// use config::viewer::ViewerConfig;
/// let config = ViewerConfig::default();
/// assert!(config.near > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Near clip plane distance.
    pub near: f64,
    /// Far clip plane distance.
    pub far: f64,
    /// Angular subdivision used by curved primitives.
    pub segments: u32,
}

impl ViewerConfig {
    /// Builds a configuration, rejecting projections that cannot be inverted.
    ///
    /// # Examples
    /// ```
    /// use config::viewer::ViewerConfig;
    /// let cfg = ViewerConfig::new(75.0, 0.1, 1000.0, 24).expect("valid config");
    /// assert_eq!(cfg.segments, 24);
    /// ```
    pub fn new(fov_degrees: f64, near: f64, far: f64, segments: u32) -> Result<Self, ConfigError> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFov(fov_degrees));
        }
        if !(near > 0.0) {
            return Err(ConfigError::InvalidNear(near));
        }
        if !(far > near) {
            return Err(ConfigError::InvalidFar { near, far });
        }
        if segments == 0 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self {
            fov_degrees,
            near,
            far,
            segments,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Field of view outside the open interval (0, 180).
    #[error("field of view must be in (0, 180) degrees: {0}")]
    InvalidFov(f64),
    /// Near plane at or behind the camera.
    #[error("near plane must be positive: {0}")]
    InvalidNear(f64),
    /// Far plane not beyond the near plane.
    #[error("far plane {far} must be beyond near plane {near}")]
    InvalidFar {
        /// Requested near plane.
        near: f64,
        /// Requested far plane.
        far: f64,
    },
    /// Zero subdivisions.
    #[error("segments must be >= 1: {0}")]
    InvalidSegments(u32),
}
