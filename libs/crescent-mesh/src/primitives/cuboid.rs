//! # Box Primitive
//!
//! Generates an axis-aligned box centred on the origin. Each face owns its
//! four vertices so normals stay flat and every face gets the full UV square.

use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Face frames as (normal, u axis, v axis) with `u x v == normal`, so the
/// corner order below winds counter-clockwise seen from outside.
const FACES: [(DVec3, DVec3, DVec3); 6] = [
    (DVec3::X, DVec3::NEG_Z, DVec3::Y),
    (DVec3::NEG_X, DVec3::Z, DVec3::Y),
    (DVec3::Y, DVec3::X, DVec3::NEG_Z),
    (DVec3::NEG_Y, DVec3::X, DVec3::Z),
    (DVec3::Z, DVec3::X, DVec3::Y),
    (DVec3::NEG_Z, DVec3::NEG_X, DVec3::Y),
];

const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Creates a box mesh with the given extents.
///
/// # Returns
///
/// 24 vertices (4 per face), 12 triangles, per-face UVs and normals.
///
/// # Example
///
/// ```rust
/// use crescent_mesh::primitives::create_box;
///
/// let mesh = create_box(1.0, 1.0, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(width: f64, height: f64, depth: f64) -> Result<Mesh, MeshError> {
    if !(width > 0.0 && height > 0.0 && depth > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Box extents must be positive: [{}, {}, {}]",
            width, height, depth
        )));
    }

    let half = DVec3::new(width, height, depth) * 0.5;
    let mut mesh = Mesh::with_capacity(24, 12);
    let mut normals = Vec::with_capacity(24);

    for (normal, u_axis, v_axis) in FACES {
        let base = mesh.vertex_count() as u32;

        for (su, sv) in CORNERS {
            let position = (normal + u_axis * su + v_axis * sv) * half;
            let uv = DVec2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5);
            mesh.add_vertex_with_uv(position, uv);
            normals.push(normal);
        }

        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh.set_normals(normals);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(2.0, 3.0, 4.0).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.check_topology().is_ok());
    }

    #[test]
    fn test_box_bounding_box() {
        let mesh = create_box(2.0, 3.0, 4.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -1.5, -2.0));
        assert_eq!(max, DVec3::new(1.0, 1.5, 2.0));
    }

    #[test]
    fn test_box_winding_matches_normals() {
        let mut mesh = create_box(1.0, 1.0, 1.0).unwrap();
        let stored = mesh.normals().unwrap().to_vec();
        mesh.compute_normals();
        for (computed, expected) in mesh.normals().unwrap().iter().zip(&stored) {
            assert!(computed.abs_diff_eq(*expected, 1e-12));
        }
    }

    #[test]
    fn test_box_rejects_flat_extent() {
        assert!(create_box(1.0, 0.0, 1.0).is_err());
        assert!(create_box(-1.0, 1.0, 1.0).is_err());
    }
}
