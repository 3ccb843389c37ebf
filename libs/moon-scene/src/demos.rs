//! # Demo Scenes
//!
//! The five selectable demos, each a complete scene with its own camera pose
//! and control rig.
//!
//! | Demo               | Camera      | Controls  | Animation                 |
//! |--------------------|-------------|-----------|---------------------------|
//! | `green-cube`       | (0, 0, 5)   | fixed     | cube spins on X and Y     |
//! | `spinning-cube`    | (2, 2, 2)   | turntable | cube spins on X and Y     |
//! | `crescent-spheres` | (5, 5, 5)   | fixed     | moon group spins on Y     |
//! | `crescent-custom`  | (5, 5, 5)   | fixed     | crescent mesh spins on Y  |
//! | `moon-phases`      | (0, 0, 15)  | orbit     | phase wheel spins on Y    |
//!
//! `green-cube` always renders with a 75° field of view; the others take the
//! field of view from [`ViewerConfig`].

use std::fmt;
use std::str::FromStr;

use config::constants::{
    CRESCENT_SPIN_PER_FRAME, CUBE_AMBIENT_INTENSITY, CUBE_CLEAR_COLOR, CUBE_COLOR,
    CUBE_SPIN_PER_FRAME, GREEN_CUBE_COLOR, GREEN_CUBE_FOV_DEGREES, MOON_AMBIENT_INTENSITY,
    MOON_COLOR, MOON_METALNESS, MOON_ROUGHNESS, NIGHT_SKY_COLOR, PHASE_MOON_RADIUS,
    WHEEL_CENTER_COLOR, WHEEL_CENTER_RADIUS, WHEEL_CENTER_SEGMENTS, WHEEL_RADIUS,
    WHEEL_SPIN_PER_FRAME,
};
use config::viewer::ViewerConfig;
use crescent_mesh::primitives::CrescentParams;
use glam::DVec3;

use crate::camera::PerspectiveCamera;
use crate::controls::{Controls, OrbitControls, TurntableControls};
use crate::error::SceneError;
use crate::phases::{label_marker, moon_model, wheel_position, PHASE_WHEEL};
use crate::scene::{Geometry, Group, Lighting, Material, MeshNode, Scene, Transform};

const GREEN_CUBE_CAMERA: DVec3 = DVec3::new(0.0, 0.0, 5.0);
const CUBE_CAMERA: DVec3 = DVec3::new(2.0, 2.0, 2.0);
const CRESCENT_CAMERA: DVec3 = DVec3::new(5.0, 5.0, 5.0);
const WHEEL_CAMERA: DVec3 = DVec3::new(0.0, 0.0, 15.0);

const CUBE_INITIAL_ROTATION: DVec3 = DVec3::new(0.4, 0.4, 0.0);
const CUT_SPHERE_RADIUS: f64 = 0.8;
const CUT_SPHERE_OFFSET: f64 = 0.3;

/// Selectable demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    GreenCube,
    SpinningCube,
    CrescentSpheres,
    CrescentCustom,
    MoonPhases,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::GreenCube,
        DemoKind::SpinningCube,
        DemoKind::CrescentSpheres,
        DemoKind::CrescentCustom,
        DemoKind::MoonPhases,
    ];

    /// Kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            DemoKind::GreenCube => "green-cube",
            DemoKind::SpinningCube => "spinning-cube",
            DemoKind::CrescentSpheres => "crescent-spheres",
            DemoKind::CrescentCustom => "crescent-custom",
            DemoKind::MoonPhases => "moon-phases",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemoKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SceneError::UnknownDemo(s.to_string()))
    }
}

/// A ready-to-run demo.
#[derive(Debug, Clone)]
pub struct Demo {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: Controls,
}

impl Demo {
    /// Builds the scene, camera and controls for `kind`.
    pub fn build(kind: DemoKind, config: &ViewerConfig, aspect: f64) -> Result<Self, SceneError> {
        let segments = config.segments;
        let (scene, position, controls) = match kind {
            DemoKind::GreenCube => (green_cube()?, GREEN_CUBE_CAMERA, Controls::Fixed),
            DemoKind::SpinningCube => (
                spinning_cube()?,
                CUBE_CAMERA,
                Controls::Turntable(TurntableControls::default()),
            ),
            DemoKind::CrescentSpheres => {
                (crescent_spheres(segments)?, CRESCENT_CAMERA, Controls::Fixed)
            }
            DemoKind::CrescentCustom => {
                (crescent_custom(segments)?, CRESCENT_CAMERA, Controls::Fixed)
            }
            DemoKind::MoonPhases => (
                moon_phases(segments)?,
                WHEEL_CAMERA,
                Controls::Orbit(OrbitControls::new(WHEEL_CAMERA.length())),
            ),
        };

        let config = match kind {
            DemoKind::GreenCube => ViewerConfig {
                fov_degrees: GREEN_CUBE_FOV_DEGREES,
                ..*config
            },
            _ => *config,
        };
        let mut camera = PerspectiveCamera::new(&config, aspect);
        camera.set_position(position);
        camera.look_at(DVec3::ZERO);

        let meshes = scene.meshes();
        log::info!(
            "Built demo {kind}: {} meshes, {} triangles",
            meshes.len(),
            meshes.iter().map(|(node, _)| node.mesh.triangle_count()).sum::<usize>()
        );

        Ok(Self {
            scene,
            camera,
            controls,
        })
    }
}

fn moon_material() -> Material {
    Material::standard(MOON_COLOR, MOON_ROUGHNESS, MOON_METALNESS)
}

fn sphere(radius: f64, segments: u32) -> Geometry {
    Geometry::Sphere {
        radius,
        width_segments: segments,
        height_segments: segments,
    }
}

fn green_cube() -> Result<Scene, SceneError> {
    let geometry = Geometry::Box {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    };
    let cube = MeshNode::new("cube", geometry, Material::standard(GREEN_CUBE_COLOR, 1.0, 0.0))?
        .with_spin(DVec3::new(CUBE_SPIN_PER_FRAME, CUBE_SPIN_PER_FRAME, 0.0));

    Ok(Scene::new(
        NIGHT_SKY_COLOR,
        Lighting::with_ambient(CUBE_AMBIENT_INTENSITY),
        Group::new("root").with_child(cube),
    ))
}

fn spinning_cube() -> Result<Scene, SceneError> {
    let geometry = Geometry::Box {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    };
    let cube = MeshNode::new("cube", geometry, Material::standard(CUBE_COLOR, 1.0, 0.0))?
        .with_transform(Transform::from_rotation(CUBE_INITIAL_ROTATION))
        .with_spin(DVec3::new(CUBE_SPIN_PER_FRAME, CUBE_SPIN_PER_FRAME, 0.0));

    Ok(Scene::new(
        CUBE_CLEAR_COLOR,
        Lighting::with_ambient(CUBE_AMBIENT_INTENSITY),
        Group::new("root").with_child(cube),
    ))
}

fn crescent_spheres(segments: u32) -> Result<Scene, SceneError> {
    let moon = MeshNode::new("moon", sphere(1.0, segments), moon_material())?;
    let cut = MeshNode::new("cut", sphere(CUT_SPHERE_RADIUS, segments), Material::invisible())?
        .with_transform(Transform::from_translation(DVec3::new(CUT_SPHERE_OFFSET, 0.0, 0.0)));

    let group = Group::new("moon group")
        .with_spin(DVec3::new(0.0, CRESCENT_SPIN_PER_FRAME, 0.0))
        .with_child(moon)
        .with_child(cut);

    Ok(Scene::new(
        NIGHT_SKY_COLOR,
        Lighting::with_ambient(MOON_AMBIENT_INTENSITY),
        Group::new("root").with_child(group),
    ))
}

fn crescent_custom(segments: u32) -> Result<Scene, SceneError> {
    let params = CrescentParams {
        segments,
        ..CrescentParams::default()
    };
    let moon = MeshNode::new("crescent", Geometry::Crescent(params), moon_material())?
        .with_spin(DVec3::new(0.0, CRESCENT_SPIN_PER_FRAME, 0.0));

    Ok(Scene::new(
        NIGHT_SKY_COLOR,
        Lighting::with_ambient(MOON_AMBIENT_INTENSITY),
        Group::new("root").with_child(moon),
    ))
}

fn moon_phases(segments: u32) -> Result<Scene, SceneError> {
    let mut wheel =
        Group::new("phase wheel").with_spin(DVec3::new(0.0, WHEEL_SPIN_PER_FRAME, 0.0));
    for (index, &phase) in PHASE_WHEEL.iter().enumerate() {
        let slot = wheel_position(index, PHASE_WHEEL.len(), WHEEL_RADIUS);
        let moon = moon_model(phase, PHASE_MOON_RADIUS, segments)?
            .with_transform(Transform::from_translation(slot));
        wheel.add(moon);
        wheel.add(label_marker(phase, slot)?);
    }

    let center = MeshNode::new(
        "center",
        sphere(WHEEL_CENTER_RADIUS, WHEEL_CENTER_SEGMENTS),
        Material::basic(WHEEL_CENTER_COLOR),
    )?;

    Ok(Scene::new(
        NIGHT_SKY_COLOR,
        Lighting::with_ambient(MOON_AMBIENT_INTENSITY),
        Group::new("root").with_child(wheel).with_child(center),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, Shading};

    fn build(kind: DemoKind) -> Demo {
        Demo::build(kind, &ViewerConfig::default(), 1.5).unwrap()
    }

    #[test]
    fn test_parse_names_roundtrip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.to_string().parse::<DemoKind>().unwrap(), kind);
        }
        assert_eq!(
            "sun-dial".parse::<DemoKind>(),
            Err(SceneError::UnknownDemo("sun-dial".to_string()))
        );
    }

    #[test]
    fn test_green_cube_demo() {
        let demo = build(DemoKind::GreenCube);
        assert_eq!(demo.scene.background, NIGHT_SKY_COLOR);
        assert_eq!(demo.camera.position(), GREEN_CUBE_CAMERA);
        assert_eq!(demo.camera.fov_degrees, GREEN_CUBE_FOV_DEGREES);
        assert!(matches!(demo.controls, Controls::Fixed));
        assert_eq!(demo.scene.lighting.ambient.intensity, CUBE_AMBIENT_INTENSITY);

        let items = demo.scene.draw_list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].color, [0.0, 1.0, 0.0]);
        assert_eq!(items[0].roughness, 1.0);
        assert_eq!(items[0].metalness, 0.0);

        let Node::Mesh(cube) = &demo.scene.root.children[0] else {
            panic!("expected cube mesh");
        };
        assert_eq!(cube.transform.rotation, DVec3::ZERO);
        assert_eq!(cube.spin, DVec3::new(0.01, 0.01, 0.0));
    }

    #[test]
    fn test_configured_fov_applies_to_other_demos() {
        let config = ViewerConfig {
            fov_degrees: 45.0,
            ..ViewerConfig::default()
        };
        let cube = Demo::build(DemoKind::SpinningCube, &config, 1.0).unwrap();
        assert_eq!(cube.camera.fov_degrees, 45.0);
        let green = Demo::build(DemoKind::GreenCube, &config, 1.0).unwrap();
        assert_eq!(green.camera.fov_degrees, GREEN_CUBE_FOV_DEGREES);
    }

    #[test]
    fn test_cube_demo() {
        let demo = build(DemoKind::SpinningCube);
        assert_eq!(demo.scene.background, CUBE_CLEAR_COLOR);
        assert_eq!(demo.camera.position(), CUBE_CAMERA);
        assert!(matches!(demo.controls, Controls::Turntable(_)));

        let items = demo.scene.draw_list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].shading, Shading::Standard);
    }

    #[test]
    fn test_crescent_spheres_hides_cut_sphere() {
        let demo = build(DemoKind::CrescentSpheres);
        assert_eq!(demo.scene.meshes().len(), 2);
        assert_eq!(demo.scene.draw_list().len(), 1);
        assert_eq!(demo.scene.lighting.ambient.intensity, MOON_AMBIENT_INTENSITY);
    }

    #[test]
    fn test_crescent_custom_uses_configured_segments() {
        let config = ViewerConfig {
            segments: 12,
            ..ViewerConfig::default()
        };
        let demo = Demo::build(DemoKind::CrescentCustom, &config, 1.0).unwrap();
        let meshes = demo.scene.meshes();
        let Geometry::Crescent(params) = meshes[0].0.geometry else {
            panic!("expected crescent geometry");
        };
        assert_eq!(params.segments, 12);
        assert!(meshes[0].0.mesh.normals().is_some());
    }

    #[test]
    fn test_moon_phases_layout() {
        let demo = build(DemoKind::MoonPhases);
        // 12 moons with shadow spheres, 12 labels, 1 centre
        assert_eq!(demo.scene.meshes().len(), 12 * 3 + 1);
        assert_eq!(demo.scene.draw_list().len(), 12 * 2 + 1);

        let Node::Group(wheel) = &demo.scene.root.children[0] else {
            panic!("expected wheel group");
        };
        assert_eq!(wheel.spin.y, WHEEL_SPIN_PER_FRAME);

        let tooltips: Vec<_> = demo
            .scene
            .meshes()
            .iter()
            .filter_map(|(node, _)| node.tooltip.clone())
            .collect();
        assert_eq!(tooltips.len(), 12);
        assert_eq!(tooltips[0], "New Moon");
        assert_eq!(tooltips[4], "Full Moon");
    }
}
