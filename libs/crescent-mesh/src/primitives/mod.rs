//! # Primitives
//!
//! Mesh generation for the lunar viewer's shapes (crescent, sphere, box).

pub mod crescent;
pub mod cuboid;
pub mod sphere;

pub use crescent::{build_crescent, CrescentGrid, CrescentParams};
pub use cuboid::create_box;
pub use sphere::create_sphere;
