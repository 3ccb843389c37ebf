//! # Config Crate
//!
//! Centralized configuration constants for the lunar viewer workspace.
//! All magic numbers and tunable parameters are defined here to keep the
//! mesh builders, scene model and WASM bindings consistent.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DEFAULT_SEGMENTS;
//! use config::ViewerConfig;
//!
//! let config = ViewerConfig::new(75.0, 0.1, 100.0, 48)?;
//! assert_eq!(config.segments, 48);
//!
//! let requested = 0;
//! let segments = if requested > 0 { requested } else { DEFAULT_SEGMENTS };
//! assert_eq!(segments, DEFAULT_SEGMENTS);
//! # Ok::<(), config::ConfigError>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Demo Compatible**: Defaults reproduce the demo scenes exactly

pub mod constants;
pub mod viewer;

pub use viewer::{ConfigError, ViewerConfig};
