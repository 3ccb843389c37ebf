//! # Sphere Primitive
//!
//! Generates UV spheres laid out the way browser rendering engines expect:
//! one seam column duplicated so texture coordinates wrap cleanly, and the
//! zero-area triangles at each pole skipped.

use std::f64::consts::{PI, TAU};

use config::constants::{MIN_SPHERE_HEIGHT_SEGMENTS, MIN_SPHERE_WIDTH_SEGMENTS};
use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a UV sphere mesh centred on the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `width_segments` - Subdivisions around the y axis (clamped to >= 3)
/// * `height_segments` - Subdivisions from pole to pole (clamped to >= 2)
///
/// # Returns
///
/// A mesh with positions, UVs and normals; `(width + 1) * (height + 1)`
/// vertices and `2 * width * (height - 1)` triangles.
///
/// # Example
///
/// ```rust
/// use crescent_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(0.8, 32, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 33 * 33);
/// assert_eq!(mesh.triangle_count(), 2 * 32 * 31);
/// ```
pub fn create_sphere(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    let width = width_segments.max(MIN_SPHERE_WIDTH_SEGMENTS);
    let height = height_segments.max(MIN_SPHERE_HEIGHT_SEGMENTS);
    let row = width as usize + 1;

    let mut mesh = Mesh::with_capacity(row * (height as usize + 1), (2 * width * height) as usize);
    let mut normals = Vec::with_capacity(row * (height as usize + 1));

    for iy in 0..=height {
        let v = iy as f64 / height as f64;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();

        for ix in 0..=width {
            let u = ix as f64 / width as f64;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();

            let normal = DVec3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.add_vertex_with_uv(normal * radius, DVec2::new(u, 1.0 - v));
            normals.push(normal);
        }
    }

    let row = row as u32;
    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                mesh.add_triangle(a, b, d);
            }
            if iy != height - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }

    mesh.set_normals(normals);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_basic() {
        let mesh = create_sphere(5.0, 16, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 17 * 9);
        assert_eq!(mesh.triangle_count(), 2 * 16 * 7);
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = create_sphere(5.0, 16, 16).unwrap();
        assert!(mesh.check_topology().is_ok());
    }

    #[test]
    fn test_sphere_bounding_box() {
        let radius = 5.0;
        let mesh = create_sphere(radius, 32, 32).unwrap();
        let (min, max) = mesh.bounding_box();

        let tolerance = 1e-9;
        assert_relative_eq!(max.y, radius, epsilon = tolerance);
        assert_relative_eq!(min.y, -radius, epsilon = tolerance);
        assert!(max.x <= radius + tolerance);
        assert!(min.z >= -radius - tolerance);
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let mesh = create_sphere(2.0, 12, 6).unwrap();
        let normals = mesh.normals().unwrap();
        for (v, n) in mesh.vertices().iter().zip(normals) {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            assert!(v.dot(*n) > 0.0);
        }
    }

    #[test]
    fn test_sphere_uvs_cover_unit_square() {
        let mesh = create_sphere(1.0, 4, 2).unwrap();
        let uvs = mesh.uvs().unwrap();
        assert_eq!(uvs.first(), Some(&DVec2::new(0.0, 1.0)));
        assert_eq!(uvs.last(), Some(&DVec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(0.0, 16, 16).is_err());
        assert!(create_sphere(-5.0, 16, 16).is_err());
        assert!(create_sphere(f64::NAN, 16, 16).is_err());
    }

    #[test]
    fn test_sphere_segments_clamped() {
        let mesh = create_sphere(1.0, 0, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert!(mesh.check_topology().is_ok());
    }
}
