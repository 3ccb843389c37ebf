//! # Crescent Primitive
//!
//! Builds a crescent by sampling a sphere on a latitude/longitude grid and
//! discarding every sample that falls inside a second, offset sphere.
//!
//! ## Algorithm
//!
//! ```text
//! for i in 0..=segments (phi = 2*PI*i/segments)
//!   for j in 0..=segments (theta = PI*j/segments)
//!     p = outer_radius * (sin(theta)cos(phi), cos(theta), sin(theta)sin(phi))
//!     keep p iff |p - (cut_offset, 0, 0)| > inner_radius
//! for every grid cell whose four corners were kept:
//!   emit (a, b, c) and (b, d, c)
//! ```
//!
//! Cells with any missing corner are dropped whole, so the cut edge is
//! jagged rather than a clean seam. This matches the demo's output and is
//! kept as-is.

use std::f64::consts::{PI, TAU};

use config::constants::{
    DEFAULT_CRESCENT_CUT_OFFSET, DEFAULT_CRESCENT_INNER_RADIUS, DEFAULT_CRESCENT_OUTER_RADIUS,
    DEFAULT_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Parameters of a crescent: an outer sphere with a spherical cut-out.
///
/// # Example
///
/// ```rust
/// use crescent_mesh::primitives::CrescentParams;
///
/// let mesh = CrescentParams::default().build();
/// assert!(mesh.triangle_count() > 0);
/// assert!(mesh.normals().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrescentParams {
    /// Radius of the sphere being carved.
    pub outer_radius: f64,
    /// Radius of the cut-out sphere.
    pub inner_radius: f64,
    /// X coordinate of the cut-out sphere's centre.
    pub cut_offset: f64,
    /// Angular subdivisions in both spherical directions.
    pub segments: u32,
}

impl Default for CrescentParams {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_CRESCENT_OUTER_RADIUS,
            inner_radius: DEFAULT_CRESCENT_INNER_RADIUS,
            cut_offset: DEFAULT_CRESCENT_CUT_OFFSET,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl CrescentParams {
    /// Creates crescent parameters. No validation is applied: degenerate
    /// values produce sparse or empty meshes.
    pub fn new(outer_radius: f64, inner_radius: f64, cut_offset: f64, segments: u32) -> Self {
        Self {
            outer_radius,
            inner_radius,
            cut_offset,
            segments,
        }
    }

    /// Centre of the cut-out sphere.
    pub fn cut_center(&self) -> DVec3 {
        DVec3::new(self.cut_offset, 0.0, 0.0)
    }

    /// Returns true if `point` survives the cut-out test.
    ///
    /// The comparison is strict: points exactly on the cut-out sphere are
    /// discarded.
    #[inline]
    pub fn retains(&self, point: DVec3) -> bool {
        point.distance(self.cut_center()) > self.inner_radius
    }

    /// Grid samples the builder will visit, `(segments + 1)^2`, or zero when
    /// `segments` is zero.
    pub fn sample_count(&self) -> usize {
        match self.segments {
            0 => 0,
            n => (n as usize + 1).pow(2),
        }
    }

    /// Samples the grid and records which slots were retained.
    pub fn sample_grid(&self) -> CrescentGrid {
        CrescentGrid::sample(self)
    }

    /// Builds the crescent mesh with positions, UVs and area-weighted
    /// normals.
    pub fn build(&self) -> Mesh {
        let mut mesh = self.sample_grid().triangulate();
        mesh.compute_normals();
        mesh
    }
}

/// Builds a crescent mesh without normals.
///
/// Returns positions, UVs and triangles; callers that need shading call
/// [`Mesh::compute_normals`] on the result (or use [`CrescentParams::build`]).
///
/// # Example
///
/// ```rust
/// use crescent_mesh::primitives::build_crescent;
///
/// // Cut-out sphere swallows the whole moon.
/// let mesh = build_crescent(1.0, 1.5, 0.0, 8);
/// assert!(mesh.is_empty());
/// assert_eq!(mesh.triangle_count(), 0);
/// ```
pub fn build_crescent(
    outer_radius: f64,
    inner_radius: f64,
    cut_offset: f64,
    segments: u32,
) -> Mesh {
    CrescentParams::new(outer_radius, inner_radius, cut_offset, segments)
        .sample_grid()
        .triangulate()
}

/// Sampled crescent grid.
///
/// Holds the retained vertices (with UVs) and, for every grid slot, the
/// index of its vertex in the compact buffer or `None` when the slot was cut.
#[derive(Debug, Clone)]
pub struct CrescentGrid {
    segments: u32,
    slots: Vec<Option<u32>>,
    mesh: Mesh,
}

impl CrescentGrid {
    fn sample(params: &CrescentParams) -> Self {
        let segments = params.segments;
        if segments == 0 {
            return Self {
                segments,
                slots: Vec::new(),
                mesh: Mesh::new(),
            };
        }

        let side = segments as usize + 1;
        let mut slots = Vec::with_capacity(side * side);
        let mut mesh = Mesh::with_capacity(side * side, 0);
        let steps = segments as f64;

        for i in 0..=segments {
            let phi = TAU * i as f64 / steps;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for j in 0..=segments {
                let theta = PI * j as f64 / steps;
                let (sin_theta, cos_theta) = theta.sin_cos();

                let point = DVec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi)
                    * params.outer_radius;

                let slot = params.retains(point).then(|| {
                    let uv = DVec2::new(i as f64 / steps, j as f64 / steps);
                    mesh.add_vertex_with_uv(point, uv)
                });
                slots.push(slot);
            }
        }

        Self {
            segments,
            slots,
            mesh,
        }
    }

    /// Number of angular subdivisions.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Number of grid samples considered, `(segments + 1)^2`.
    pub fn candidate_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of samples that survived the cut-out test.
    pub fn retained_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Compact vertex index of grid slot `(i, j)`, or `None` if the slot was
    /// cut away or lies outside the grid.
    pub fn slot(&self, i: u32, j: u32) -> Option<u32> {
        if i > self.segments || j > self.segments {
            return None;
        }
        let side = self.segments as usize + 1;
        self.slots
            .get(i as usize * side + j as usize)
            .copied()
            .flatten()
    }

    /// Retained vertex positions.
    pub fn vertices(&self) -> &[DVec3] {
        self.mesh.vertices()
    }

    /// Emits two triangles for every cell whose four corners were retained.
    pub fn triangulate(self) -> Mesh {
        let Self {
            segments,
            slots,
            mut mesh,
        } = self;

        let side = segments as usize + 1;
        for i in 0..segments as usize {
            for j in 0..segments as usize {
                let a = i * side + j;
                let b = a + side;
                let c = a + 1;
                let d = b + 1;

                let corners = (slots[a], slots[b], slots[c], slots[d]);
                if let (Some(a), Some(b), Some(c), Some(d)) = corners {
                    mesh.add_triangle(a, b, c);
                    mesh.add_triangle(b, d, c);
                }
            }
        }

        log::debug!(
            "crescent: {}/{} samples retained, {} triangles",
            mesh.vertex_count(),
            slots.len(),
            mesh.triangle_count()
        );

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params_match_demo() {
        let params = CrescentParams::default();
        assert_eq!(params, CrescentParams::new(1.0, 0.7, 0.3, 32));
    }

    #[test]
    fn test_grid_counts_candidates() {
        let params = CrescentParams::new(1.0, 0.7, 0.3, 4);
        assert_eq!(params.sample_count(), 25);
        let grid = params.sample_grid();
        assert_eq!(grid.candidate_count(), 25);
        assert!(grid.retained_count() <= 25);
    }

    #[test]
    fn test_zero_inner_radius_keeps_every_sample() {
        // The cut centre sits inside the sphere, never on its surface.
        let grid = CrescentParams::new(1.0, 0.0, 0.3, 6).sample_grid();
        assert_eq!(grid.retained_count(), grid.candidate_count());
        let mesh = grid.triangulate();
        assert_eq!(mesh.triangle_count(), 6 * 6 * 2);
    }

    #[test]
    fn test_zero_segments_is_empty() {
        let params = CrescentParams::new(1.0, 0.7, 0.3, 0);
        assert_eq!(params.sample_count(), 0);
        let grid = params.sample_grid();
        assert_eq!(grid.candidate_count(), 0);
        assert!(grid.triangulate().is_empty());
    }

    #[test]
    fn test_slot_lookup() {
        let grid = CrescentParams::new(1.0, 0.7, 0.8, 8).sample_grid();
        // theta = 0 is the north pole, far from the cut-out.
        assert_eq!(grid.slot(0, 0), Some(0));
        assert_eq!(grid.slot(9, 0), None);
        // phi = 0, theta = PI/2 is (1, 0, 0), inside the cut-out.
        assert_eq!(grid.slot(0, 4), None);
    }

    #[test]
    fn test_points_on_cut_surface_are_discarded() {
        let params = CrescentParams::new(1.0, 0.5, 0.5, 4);
        assert!(!params.retains(DVec3::new(1.0, 0.0, 0.0)));
        assert!(!params.retains(DVec3::ZERO));
        assert!(params.retains(DVec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_uvs_follow_grid() {
        let params = CrescentParams::new(1.0, 0.0, 5.0, 2);
        let mesh = build_crescent(
            params.outer_radius,
            params.inner_radius,
            params.cut_offset,
            params.segments,
        );
        let uvs = mesh.uvs().unwrap();
        assert_eq!(uvs.len(), 9);
        assert_eq!(uvs[0], DVec2::new(0.0, 0.0));
        assert_eq!(uvs[1], DVec2::new(0.0, 0.5));
        assert_eq!(uvs[3], DVec2::new(0.5, 0.0));
        assert_eq!(uvs[8], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_vertices_lie_on_outer_sphere() {
        let mesh = build_crescent(2.5, 0.7, 0.3, 16);
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_full_sphere_winding() {
        // With nothing cut, the first cell's triangles follow (a, b, c),
        // (b, d, c) over the grid.
        let mesh = build_crescent(1.0, 0.0, 0.0, 2);
        assert_eq!(mesh.triangle(0), [0, 3, 1]);
        assert_eq!(mesh.triangle(1), [3, 4, 1]);
    }

    #[test]
    fn test_build_computes_unit_normals() {
        let mesh = CrescentParams::default().build();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), mesh.vertex_count());
        let unit = normals
            .iter()
            .filter(|n| (n.length() - 1.0).abs() < 1e-9)
            .count();
        assert!(unit > 0);
        assert!(normals.iter().all(|n| n.length() < 1.0 + 1e-9));
    }

    #[test]
    fn test_build_passes_topology_check() {
        let mesh = CrescentParams::default().build();
        assert!(mesh.check_topology().is_ok());
    }
}
