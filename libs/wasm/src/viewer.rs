//! # Viewer Bindings
//!
//! JavaScript handle around [`moon_scene::Viewer`]. The host owns the canvas
//! and the render loop; it forwards DOM events here and reads back matrices,
//! meshes and the draw list each frame.
//!
//! ```javascript
//! const viewer = new Viewer("moon-phases", canvas.width, canvas.height);
//! canvas.onmousedown = (e) => viewer.pointer_down(e.clientX, e.clientY);
//! canvas.onmousemove = (e) => {
//!   viewer.pointer_move(e.clientX, e.clientY);
//!   canvas.title = viewer.hover(e.clientX, e.clientY) ?? "";
//! };
//! canvas.onmouseup = () => viewer.pointer_up();
//!
//! function frame() {
//!   viewer.tick();
//!   draw(viewer.view_matrix(), viewer.projection_matrix(), JSON.parse(viewer.draw_list_json()));
//!   requestAnimationFrame(frame);
//! }
//! ```

use config::ViewerConfig;
use moon_scene::{DemoKind, SceneError, Viewer};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::mesh_handle::MeshHandle;

/// Snapshot of viewer state for host-side debugging overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerState {
    pub demo: String,
    pub frame: u64,
    pub width: u32,
    pub height: u32,
    pub camera_position: [f64; 3],
    pub dragging: bool,
}

/// Interactive demo session exported to JavaScript as `Viewer`.
#[wasm_bindgen(js_name = Viewer)]
#[derive(Debug, Clone)]
pub struct WasmViewer {
    inner: Viewer,
}

#[wasm_bindgen(js_class = Viewer)]
impl WasmViewer {
    /// Starts the named demo (`green-cube`, `spinning-cube`,
    /// `crescent-spheres`, `crescent-custom` or `moon-phases`).
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown demo or a zero-sized canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(demo: &str, width: u32, height: u32) -> Result<WasmViewer, JsValue> {
        Self::create(demo, width, height).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Starts the named demo with a custom projection and tessellation.
    ///
    /// # Errors
    /// Everything the constructor rejects, plus a field of view outside
    /// (0, 180) degrees, a non-positive near plane, a far plane not beyond
    /// the near plane, or zero segments.
    pub fn with_settings(
        demo: &str,
        width: u32,
        height: u32,
        fov_degrees: f64,
        near: f64,
        far: f64,
        segments: u32,
    ) -> Result<WasmViewer, JsValue> {
        Self::create_with_settings(demo, width, height, fov_degrees, near, far, segments)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.pointer_down(x, y);
    }

    /// Returns true if the camera moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// # Errors
    /// Rejects a zero dimension; the viewer keeps its previous size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .resize(width, height)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    /// Tooltip under the pointer, or `undefined`.
    pub fn hover(&self, x: f64, y: f64) -> Option<String> {
        self.inner.hover(x, y)
    }

    /// Column-major view matrix.
    pub fn view_matrix(&self) -> Vec<f32> {
        self.inner.camera().view_matrix().as_mat4().to_cols_array().to_vec()
    }

    /// Column-major projection matrix.
    pub fn projection_matrix(&self) -> Vec<f32> {
        self.inner.camera().projection_matrix().as_mat4().to_cols_array().to_vec()
    }

    /// Clear colour as `[r, g, b]` in `0.0..=1.0`.
    pub fn clear_color(&self) -> Vec<f32> {
        config::constants::color_to_rgb(self.inner.scene().background).to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn mesh_count(&self) -> usize {
        self.inner.meshes().len()
    }

    /// Buffers for the mesh at `index` in draw-list numbering.
    pub fn mesh(&self, index: usize) -> Option<MeshHandle> {
        self.inner
            .meshes()
            .get(index)
            .map(|node| MeshHandle::from_mesh(&node.mesh))
    }

    /// Visible meshes with world matrices and materials, as JSON.
    pub fn draw_list_json(&self) -> Result<String, JsValue> {
        self.draw_list_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Debug snapshot, as JSON.
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state()).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl WasmViewer {
    /// Host-only constructor returning the Rust error type.
    pub fn create(demo: &str, width: u32, height: u32) -> Result<Self, SceneError> {
        Self::start(demo, width, height, &ViewerConfig::default())
    }

    /// Host-only twin of [`WasmViewer::with_settings`].
    pub fn create_with_settings(
        demo: &str,
        width: u32,
        height: u32,
        fov_degrees: f64,
        near: f64,
        far: f64,
        segments: u32,
    ) -> Result<Self, SceneError> {
        let config = ViewerConfig::new(fov_degrees, near, far, segments)
            .inspect_err(|e| log::warn!("Rejected viewer settings: {e}"))?;
        Self::start(demo, width, height, &config)
    }

    fn start(
        demo: &str,
        width: u32,
        height: u32,
        config: &ViewerConfig,
    ) -> Result<Self, SceneError> {
        let kind = demo.parse::<DemoKind>()?;
        let inner = Viewer::with_config(kind, width, height, config)?;
        log::info!("Viewer started: {kind} at {width}x{height}");
        Ok(Self { inner })
    }

    pub fn draw_list_json_internal(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.inner.draw_list())
    }

    pub fn state(&self) -> ViewerState {
        let viewport = self.inner.viewport();
        ViewerState {
            demo: self.inner.kind().to_string(),
            frame: self.inner.scene().frame(),
            width: viewport.width(),
            height: viewport.height(),
            camera_position: self.inner.camera().position().to_array(),
            dragging: self.inner.controls().is_dragging(),
        }
    }

    pub fn inner(&self) -> &Viewer {
        &self.inner
    }
}
