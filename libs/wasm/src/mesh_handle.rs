//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh buffers handed to JavaScript.

use crescent_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// Flattened mesh buffers ready for GPU upload.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_crescent(1.0, 0.7, 0.3, 32);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// if (mesh.has_normals()) {
///   geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// [x, y, z, ...]
    vertices: Vec<f32>,
    /// [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// [u, v, ...]
    uvs: Option<Vec<f32>>,
    /// [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Vertex positions as a Float32Array of length `vertex_count * 3`.
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Triangle indices as a Uint32Array of length `triangle_count * 3`.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Texture coordinates as a Float32Array, if present.
    #[wasm_bindgen]
    pub fn uvs(&self) -> Option<js_sys::Float32Array> {
        self.uvs.as_ref().map(|uv| js_sys::Float32Array::from(&uv[..]))
    }

    /// Vertex normals as a Float32Array, if present.
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals.as_ref().map(|n| js_sys::Float32Array::from(&n[..]))
    }

    #[wasm_bindgen]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens `mesh` into f32/u32 buffers.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            uvs: mesh.uvs_f32(),
            normals: mesh.normals_f32(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }

    /// Position buffer without crossing into JavaScript.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn uv_buffer(&self) -> Option<&[f32]> {
        self.uvs.as_deref()
    }

    pub fn normal_buffer(&self) -> Option<&[f32]> {
        self.normals.as_deref()
    }
}
