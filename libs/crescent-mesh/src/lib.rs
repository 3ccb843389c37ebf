//! # Crescent Mesh
//!
//! Browser-safe procedural mesh generation for the lunar viewer.
//!
//! ## Architecture
//!
//! ```text
//! CrescentParams / primitive extents → crescent-mesh (Mesh) → GPU buffers
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Crescent**: latitude/longitude sampling with a spherical cut-out
//! - **Sphere / Box**: fixed-topology primitives with UVs and normals
//! - **Normals**: area-weighted face-normal accumulation
//! - **Picking**: Möller–Trumbore ray casting
//!
//! ## Usage
//!
//! ```rust
//! use crescent_mesh::build_crescent;
//!
//! let mut mesh = build_crescent(1.0, 0.7, 0.3, 32);
//! mesh.compute_normals();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod raycast;

pub use error::MeshError;
pub use mesh::Mesh;
pub use primitives::{build_crescent, create_box, create_sphere, CrescentParams};
pub use raycast::{Ray, RayHit};
