//! WASM-facing entry points for the lunar viewer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! plain Rust values instead of `JsValue`.
//!
//! ```
//! let mesh = moon_wasm::build_crescent_internal(1.0, 0.7, 0.3, 16);
//! assert!(mesh.triangle_count() > 0);
//! ```

use config::constants::DEFAULT_SEGMENTS;
use crescent_mesh::primitives::create_sphere;
use crescent_mesh::{CrescentParams, MeshError};
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod viewer;

pub use mesh_handle::MeshHandle;
pub use viewer::{ViewerState, WasmViewer};

/// Installs the panic hook and the console logger.
///
/// Safe to call more than once; later calls are no-ops.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "moon-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Debug).is_ok() {
            log::info!("moon-wasm {} ready", env!("CARGO_PKG_VERSION"));
        }
    }
}

/// Default tessellation segment count.
///
/// # Examples
/// ```
/// assert_eq!(moon_wasm::default_segments(), 32);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Builds a crescent mesh with UVs and normals.
///
/// Degenerate parameters never fail: they produce a sparse or empty mesh.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_crescent(1.0, 0.7, 0.3, 32);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn build_crescent(
    outer_radius: f64,
    inner_radius: f64,
    cut_offset: f64,
    segments: u32,
) -> MeshHandle {
    build_crescent_internal(outer_radius, inner_radius, cut_offset, segments)
}

/// Host-only twin of [`build_crescent`].
pub fn build_crescent_internal(
    outer_radius: f64,
    inner_radius: f64,
    cut_offset: f64,
    segments: u32,
) -> MeshHandle {
    let mesh = CrescentParams::new(outer_radius, inner_radius, cut_offset, segments).build();
    log::debug!(
        "Crescent ({outer_radius}, {inner_radius}, {cut_offset}, {segments}): \
         {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    MeshHandle::from_mesh(&mesh)
}

/// Builds a UV sphere.
///
/// # Errors
/// Returns a JavaScript error for a non-positive radius.
#[wasm_bindgen]
pub fn build_sphere(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
) -> Result<MeshHandle, JsValue> {
    build_sphere_internal(radius, width_segments, height_segments)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`build_sphere`].
pub fn build_sphere_internal(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
) -> Result<MeshHandle, MeshError> {
    let mesh = create_sphere(radius, width_segments, height_segments)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

#[cfg(test)]
mod tests;
