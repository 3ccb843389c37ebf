//! # Ray Casting
//!
//! Ray/sphere and ray/triangle intersection used for pointer picking.
//!
//! ## Contents
//!
//! - **Ray**: origin plus normalised direction
//! - **Intersection**: `intersect_sphere`, `intersect_triangle`
//! - **Mesh query**: `Mesh::raycast` returns the nearest hit

use config::constants::RAY_EPSILON;
use glam::{DMat4, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// A half-line starting at `origin` and travelling along `direction`.
///
/// # Example
///
/// ```rust
/// use crescent_mesh::raycast::Ray;
/// use glam::DVec3;
///
/// let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z).unwrap();
/// let t = ray.intersect_sphere(DVec3::ZERO, 1.0).unwrap();
/// assert!((t - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

/// Nearest intersection between a ray and a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray.
    pub distance: f64,
    /// Index of the triangle that was hit.
    pub triangle: usize,
    /// Intersection point.
    pub point: DVec3,
}

impl Ray {
    /// Creates a ray, normalising `direction`.
    ///
    /// Returns an error for a zero or non-finite direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Result<Self, MeshError> {
        let direction = direction.try_normalize().ok_or_else(|| {
            MeshError::degenerate(format!("Ray direction cannot be normalised: {direction}"))
        })?;
        Ok(Self { origin, direction })
    }

    /// Creates a ray from `origin` towards `target`.
    pub fn towards(origin: DVec3, target: DVec3) -> Result<Self, MeshError> {
        Self::new(origin, target - origin)
    }

    /// Ray origin.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Unit direction.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Transforms the ray by `matrix`, renormalising the direction.
    ///
    /// Distances measured along the transformed ray are in the target space;
    /// map hit points back with the inverse matrix to compare them.
    pub fn transformed(&self, matrix: &DMat4) -> Result<Self, MeshError> {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }

    /// Distance to the nearest intersection with a sphere, if any.
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Option<f64> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }

    /// Möller–Trumbore ray-triangle intersection.
    ///
    /// Both faces count as hits. Returns the distance along the ray.
    ///
    /// ## Reference
    ///
    /// Möller, T., & Trumbore, B. (1997). Fast, minimum storage ray-triangle intersection.
    pub fn intersect_triangle(&self, v0: DVec3, v1: DVec3, v2: DVec3) -> Option<f64> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray parallel to triangle
        if a.abs() < RAY_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = self.origin - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > RAY_EPSILON).then_some(t)
    }
}

impl Mesh {
    /// Returns the nearest triangle hit by `ray`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crescent_mesh::primitives::create_box;
    /// use crescent_mesh::raycast::Ray;
    /// use glam::DVec3;
    ///
    /// let cube = create_box(1.0, 1.0, 1.0).unwrap();
    /// let ray = Ray::new(DVec3::new(0.1, 0.2, 3.0), DVec3::NEG_Z).unwrap();
    /// let hit = cube.raycast(&ray).unwrap();
    /// assert!((hit.distance - 2.5).abs() < 1e-12);
    /// ```
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        (0..self.triangle_count())
            .filter_map(|triangle| {
                let [v0, v1, v2] = self.triangle_positions(triangle);
                ray.intersect_triangle(v0, v1, v2).map(|distance| RayHit {
                    distance,
                    triangle,
                    point: ray.at(distance),
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{build_crescent, create_sphere};
    use approx::assert_relative_eq;

    fn down_z(origin: DVec3) -> Ray {
        Ray::new(origin, DVec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_ray_normalises_direction() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(ray.direction().length(), 1.0);
        assert_relative_eq!(ray.at(5.0).z, 4.0);
    }

    #[test]
    fn test_ray_rejects_zero_direction() {
        assert!(Ray::new(DVec3::ZERO, DVec3::ZERO).is_err());
        assert!(Ray::towards(DVec3::ONE, DVec3::ONE).is_err());
    }

    #[test]
    fn test_sphere_hit_and_miss() {
        let ray = down_z(DVec3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(ray.intersect_sphere(DVec3::ZERO, 2.0).unwrap(), 8.0);
        assert!(ray.intersect_sphere(DVec3::new(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_missed() {
        let ray = down_z(DVec3::new(0.0, 0.0, -10.0));
        assert!(ray.intersect_sphere(DVec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_sphere_from_inside_hits_exit() {
        let ray = down_z(DVec3::ZERO);
        assert_relative_eq!(ray.intersect_sphere(DVec3::ZERO, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_triangle_hit_both_faces() {
        let v0 = DVec3::new(-1.0, -1.0, 0.0);
        let v1 = DVec3::new(1.0, -1.0, 0.0);
        let v2 = DVec3::new(0.0, 1.0, 0.0);
        let front = down_z(DVec3::new(0.0, 0.0, 2.0));
        let back = Ray::new(DVec3::new(0.0, 0.0, -2.0), DVec3::Z).unwrap();
        assert_relative_eq!(front.intersect_triangle(v0, v1, v2).unwrap(), 2.0);
        assert_relative_eq!(back.intersect_triangle(v0, v1, v2).unwrap(), 2.0);
    }

    #[test]
    fn test_triangle_miss_outside_and_parallel() {
        let (v0, v1, v2) = (DVec3::ZERO, DVec3::X, DVec3::Y);
        assert!(down_z(DVec3::new(2.0, 2.0, 1.0)).intersect_triangle(v0, v1, v2).is_none());
        let parallel = Ray::new(DVec3::new(-1.0, 0.2, 0.0), DVec3::X).unwrap();
        assert!(parallel.intersect_triangle(v0, v1, v2).is_none());
    }

    #[test]
    fn test_mesh_raycast_returns_nearest() {
        let sphere = create_sphere(1.0, 24, 24).unwrap();
        let hit = sphere.raycast(&down_z(DVec3::new(0.01, 0.013, 5.0))).unwrap();
        // Tessellation pulls the surface slightly inside the true sphere.
        assert!(hit.distance >= 4.0 - 1e-9);
        assert!(hit.distance < 4.05);
        assert!(hit.point.z > 0.0);
    }

    #[test]
    fn test_mesh_raycast_misses_empty_mesh() {
        let empty = build_crescent(1.0, 1.5, 0.0, 8);
        assert!(empty.raycast(&down_z(DVec3::new(0.0, 0.0, 5.0))).is_none());
    }

    #[test]
    fn test_transformed_ray_into_local_space() {
        let world_to_local = DMat4::from_translation(DVec3::new(-3.0, 0.0, 0.0));
        let ray = down_z(DVec3::new(3.0, 0.0, 5.0));
        let local = ray.transformed(&world_to_local).unwrap();
        assert_eq!(local.origin(), DVec3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(local.intersect_sphere(DVec3::ZERO, 1.0).unwrap(), 4.0);
    }
}
