//! # Scene Graph
//!
//! A small retained scene: groups of mesh nodes with transforms, materials
//! and a per-frame spin, plus the light rig and clear colour.
//!
//! ## Frame model
//!
//! ```text
//! Scene::tick()      rotation += spin on every node, frame += 1
//! Scene::meshes()    depth-first (node, world matrix) list
//! Scene::draw_list() visible meshes as renderer-ready DrawItems
//! ```

use config::constants::{
    color_to_rgb, AMBIENT_LIGHT_COLOR, DIRECTIONAL_LIGHT_COLOR, DIRECTIONAL_LIGHT_INTENSITY,
    DIRECTIONAL_LIGHT_POSITION, MAX_VERTICES, MOON_AMBIENT_INTENSITY,
};
use crescent_mesh::primitives::{create_box, create_sphere, CrescentParams};
use crescent_mesh::{Mesh, MeshError};
use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

// =============================================================================
// Materials
// =============================================================================

/// Lighting model used for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Physically based, responds to lights.
    Standard,
    /// Flat colour, ignores lights.
    Basic,
}

/// Surface appearance of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// `0xRRGGBB`.
    pub color: u32,
    pub roughness: f64,
    pub metalness: f64,
    pub opacity: f64,
    pub shading: Shading,
}

impl Material {
    pub fn standard(color: u32, roughness: f64, metalness: f64) -> Self {
        Self {
            color,
            roughness,
            metalness,
            opacity: 1.0,
            shading: Shading::Standard,
        }
    }

    pub fn basic(color: u32) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
            shading: Shading::Basic,
        }
    }

    /// Fully transparent black. Stays in the scene graph but is never drawn.
    pub fn invisible() -> Self {
        Self {
            opacity: 0.0,
            ..Self::standard(0x000000, 1.0, 0.0)
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// Translation, XYZ Euler rotation (radians) and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn from_rotation(rotation: DVec3) -> Self {
        Self {
            rotation,
            ..Self::default()
        }
    }

    /// Local-to-parent matrix.
    pub fn matrix(&self) -> DMat4 {
        let r = self.rotation;
        let rotation = DQuat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        DMat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Description of the mesh a node was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Crescent(CrescentParams),
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
}

impl Geometry {
    /// Tessellates the geometry and checks the result is safe to upload.
    /// Crescents always get normals.
    ///
    /// # Errors
    /// Invalid primitive parameters, a crescent grid larger than
    /// [`MAX_VERTICES`], or a mesh that fails [`Mesh::check_topology`].
    pub fn build(&self) -> Result<Mesh, MeshError> {
        let mesh = match *self {
            Geometry::Crescent(params) => {
                let count = params.sample_count();
                if count > MAX_VERTICES {
                    return Err(MeshError::TooManyVertices {
                        count,
                        max: MAX_VERTICES,
                    });
                }
                params.build()
            }
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => create_sphere(radius, width_segments, height_segments)?,
            Geometry::Box { width, height, depth } => create_box(width, height, depth)?,
        };
        mesh.check_topology()?;
        Ok(mesh)
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A drawable mesh with its material and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub name: String,
    pub geometry: Geometry,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Transform,
    /// Rotation added every frame.
    pub spin: DVec3,
    /// Text shown when the pointer hovers this mesh.
    pub tooltip: Option<String>,
}

impl MeshNode {
    /// Builds the mesh for `geometry` once and wraps it in a node.
    pub fn new(
        name: impl Into<String>,
        geometry: Geometry,
        material: Material,
    ) -> Result<Self, MeshError> {
        Ok(Self {
            name: name.into(),
            mesh: geometry.build()?,
            geometry,
            material,
            transform: Transform::default(),
            spin: DVec3::ZERO,
            tooltip: None,
        })
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_spin(mut self, spin: DVec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// A transform applied to a list of children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub name: String,
    pub transform: Transform,
    pub spin: DVec3,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_spin(mut self, spin: DVec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn add(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add(node);
        self
    }

    fn tick(&mut self) {
        self.transform.rotation += self.spin;
        for child in &mut self.children {
            match child {
                Node::Mesh(mesh) => mesh.transform.rotation += mesh.spin,
                Node::Group(group) => group.tick(),
            }
        }
    }

    fn collect<'a>(&'a self, parent: DMat4, out: &mut Vec<(&'a MeshNode, DMat4)>) {
        let world = parent * self.transform.matrix();
        for child in &self.children {
            match child {
                Node::Mesh(mesh) => out.push((mesh, world * mesh.transform.matrix())),
                Node::Group(group) => group.collect(world, out),
            }
        }
    }
}

/// Scene graph node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mesh(MeshNode),
    Group(Group),
}

impl From<MeshNode> for Node {
    fn from(mesh: MeshNode) -> Self {
        Node::Mesh(mesh)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

// =============================================================================
// Lights
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f64,
    pub position: DVec3,
}

/// Ambient fill plus one key light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Lighting {
    /// Standard rig with the given ambient intensity.
    pub fn with_ambient(intensity: f64) -> Self {
        Self {
            ambient: AmbientLight {
                color: AMBIENT_LIGHT_COLOR,
                intensity,
            },
            directional: DirectionalLight {
                color: DIRECTIONAL_LIGHT_COLOR,
                intensity: DIRECTIONAL_LIGHT_INTENSITY,
                position: DVec3::from_array(DIRECTIONAL_LIGHT_POSITION),
            },
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::with_ambient(MOON_AMBIENT_INTENSITY)
    }
}

// =============================================================================
// Scene
// =============================================================================

/// One mesh as the renderer needs it for a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    pub name: String,
    /// Index into [`Scene::meshes`].
    pub mesh_index: usize,
    /// Column-major local-to-world matrix.
    pub world_matrix: [f32; 16],
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub shading: Shading,
}

/// Complete scene: clear colour, lights and the node tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Clear colour, `0xRRGGBB`.
    pub background: u32,
    pub lighting: Lighting,
    pub root: Group,
    frame: u64,
}

impl Scene {
    pub fn new(background: u32, lighting: Lighting, root: Group) -> Self {
        Self {
            background,
            lighting,
            root,
            frame: 0,
        }
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances one frame, applying every node's spin.
    pub fn tick(&mut self) {
        self.root.tick();
        self.frame += 1;
    }

    /// All mesh nodes with their world matrices, depth-first.
    pub fn meshes(&self) -> Vec<(&MeshNode, DMat4)> {
        let mut out = Vec::new();
        self.root.collect(DMat4::IDENTITY, &mut out);
        out
    }

    /// Visible meshes ready to draw.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.meshes()
            .into_iter()
            .enumerate()
            .filter(|(_, (node, _))| node.material.is_visible())
            .map(|(mesh_index, (node, world))| DrawItem {
                name: node.name.clone(),
                mesh_index,
                world_matrix: world.as_mat4().to_cols_array(),
                color: color_to_rgb(node.material.color),
                opacity: node.material.opacity as f32,
                roughness: node.material.roughness as f32,
                metalness: node.material.metalness as f32,
                shading: node.material.shading,
            })
            .collect()
    }
}
