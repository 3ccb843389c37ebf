//! # Viewer
//!
//! Owns a running demo and routes host events into it: pointer input drives
//! the camera rig, resizes refresh the projection, and hover queries pick the
//! mesh under the pointer.
//!
//! ## Event flow
//!
//! ```text
//! pointer_down/move/up → Controls → camera.set_position + look_at(origin)
//! resize(w, h)         → Viewport → camera.set_aspect
//! tick()               → Scene::tick
//! hover(x, y)          → pick(x, y) → tooltip of the nearest mesh
//! ```

use config::viewer::ViewerConfig;
use crescent_mesh::Ray;
use glam::{DMat4, DVec3};

use crate::camera::{PerspectiveCamera, Viewport};
use crate::controls::Controls;
use crate::demos::{Demo, DemoKind};
use crate::error::SceneError;
use crate::scene::{DrawItem, MeshNode, Scene};


/// Mesh found under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    /// Index into [`Scene::meshes`].
    pub mesh_index: usize,
    /// World-space distance from the camera.
    pub distance: f64,
    /// World-space hit point.
    pub point: DVec3,
}

/// Interactive demo session.
#[derive(Debug, Clone)]
pub struct Viewer {
    kind: DemoKind,
    scene: Scene,
    camera: PerspectiveCamera,
    controls: Controls,
    viewport: Viewport,
}

impl Viewer {
    /// Starts `kind` with default settings on a `width` x `height` surface.
    pub fn new(kind: DemoKind, width: u32, height: u32) -> Result<Self, SceneError> {
        Self::with_config(kind, width, height, &ViewerConfig::default())
    }

    /// Starts `kind` with explicit camera and tessellation settings.
    ///
    /// # Errors
    /// A zero dimension or a mesh that fails to build.
    pub fn with_config(
        kind: DemoKind,
        width: u32,
        height: u32,
        config: &ViewerConfig,
    ) -> Result<Self, SceneError> {
        let viewport = Viewport::new(width, height)?;
        let Demo {
            scene,
            camera,
            controls,
        } = Demo::build(kind, config, viewport.aspect())?;
        Ok(Self {
            kind,
            scene,
            camera,
            controls,
            viewport,
        })
    }

    /// Demo being shown.
    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    /// Scene graph, including its frame counter.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current camera pose and projection.
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Pointer rig driving the camera.
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Surface size in pixels.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Starts a drag at `(x, y)` in surface pixels.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.controls.pointer_down(x, y);
    }

    /// Moves the camera if a drag is in progress. Returns true if it moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        match self.controls.pointer_move(x, y, self.camera.position()) {
            Some(position) => {
                self.camera.set_position(position);
                self.camera.look_at(DVec3::ZERO);
                true
            }
            None => false,
        }
    }

    /// Ends any drag in progress.
    pub fn pointer_up(&mut self) {
        self.controls.pointer_up();
    }

    /// Adapts the camera to a new surface size.
    ///
    /// A zero dimension is rejected and leaves the viewer unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        let viewport = Viewport::new(width, height)
            .inspect_err(|e| log::warn!("Ignoring resize: {e}"))?;
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        Ok(())
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self) {
        self.scene.tick();
    }

    /// All meshes in draw order.
    pub fn meshes(&self) -> Vec<&MeshNode> {
        self.scene.meshes().into_iter().map(|(node, _)| node).collect()
    }

    /// Visible meshes for this frame; see [`Scene::draw_list`].
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.scene.draw_list()
    }

    /// Nearest visible mesh under the pointer.
    pub fn pick(&self, x: f64, y: f64) -> Option<Pick> {
        let ray = self
            .camera
            .screen_ray(&self.viewport, x, y)
            .inspect_err(|e| log::debug!("No pick ray at ({x}, {y}): {e}"))
            .ok()?;
        let eye = self.camera.position();

        self.scene
            .meshes()
            .into_iter()
            .enumerate()
            .filter(|(_, (node, _))| node.material.is_visible())
            .filter_map(|(mesh_index, (node, world))| {
                let point = local_hit(&ray, node, world)?;
                Some(Pick {
                    mesh_index,
                    distance: point.distance(eye),
                    point,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Tooltip of the nearest visible mesh under the pointer.
    ///
    /// A mesh without a tooltip hides any tooltip-bearing mesh behind it.
    pub fn hover(&self, x: f64, y: f64) -> Option<String> {
        let pick = self.pick(x, y)?;
        let tooltip = self.scene.meshes().get(pick.mesh_index)?.0.tooltip.clone();
        log::trace!("Hover at ({x}, {y}): {tooltip:?}");
        tooltip
    }
}

/// Casts `ray` against `node` in its local space and returns the world-space
/// hit point.
fn local_hit(ray: &Ray, node: &MeshNode, world: DMat4) -> Option<DVec3> {
    let local = ray.transformed(&world.inverse()).ok()?;
    let hit = node.mesh.raycast(&local)?;
    Some(world.transform_point3(hit.point))
}
