//! # Moon Scene
//!
//! Scene description and interaction state for the lunar viewer demos.
//! Renderer-agnostic: it produces camera matrices, meshes and a draw list,
//! and the host draws them.
//!
//! ## Architecture
//!
//! ```text
//! DemoKind → Demo { Scene, PerspectiveCamera, Controls } → Viewer
//!                                                           ├─ pointer events
//!                                                           ├─ resize / tick
//!                                                           └─ hover picking
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use moon_scene::{DemoKind, Viewer};
//!
//! let mut viewer = Viewer::new("moon-phases".parse::<DemoKind>().unwrap(), 800, 600).unwrap();
//! viewer.tick();
//! assert_eq!(viewer.draw_list().len(), 25);
//! ```

pub mod camera;
pub mod controls;
pub mod demos;
pub mod error;
pub mod phases;
pub mod scene;
pub mod viewer;

pub use camera::{PerspectiveCamera, Viewport};
pub use controls::{Controls, OrbitControls, TurntableControls};
pub use demos::{Demo, DemoKind};
pub use error::SceneError;
pub use phases::{MoonPhase, PHASE_WHEEL};
pub use scene::{DrawItem, Geometry, Group, Material, MeshNode, Node, Scene, Shading, Transform};
pub use viewer::{Pick, Viewer};
