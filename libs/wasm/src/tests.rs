//! Tests for the WASM-facing helpers. Only `*_internal` paths and plain
//! accessors are exercised so nothing here needs a JS host.

use super::*;
use moon_scene::SceneError;

#[test]
fn crescent_buffers_are_consistent() {
    let mesh = build_crescent_internal(1.0, 0.7, 0.3, 32);

    assert!(mesh.triangle_count() > 0);
    assert_eq!(mesh.vertex_buffer().len(), mesh.vertex_count() as usize * 3);
    assert_eq!(mesh.index_buffer().len(), mesh.triangle_count() as usize * 3);
    assert_eq!(mesh.uv_buffer().map(<[f32]>::len), Some(mesh.vertex_count() as usize * 2));
    assert!(mesh.has_normals());

    let count = mesh.vertex_count();
    assert!(mesh.index_buffer().iter().all(|&i| i < count));
    assert!(mesh.vertex_buffer().iter().all(|v| v.is_finite()));
}

#[test]
fn swallowed_crescent_is_empty() {
    let mesh = build_crescent_internal(1.0, 1.5, 0.0, 8);
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
    assert!(mesh.index_buffer().is_empty());
}

#[test]
fn zero_segments_is_empty_not_an_error() {
    let mesh = build_crescent_internal(1.0, 0.7, 0.3, 0);
    assert!(mesh.is_empty());
}

#[test]
fn sphere_buffers() {
    let mesh = build_sphere_internal(2.0, 8, 6).unwrap();
    assert_eq!(mesh.vertex_count(), 9 * 7);
    assert!(mesh.has_normals());
    assert!(build_sphere_internal(0.0, 8, 6).is_err());
}

#[test]
fn viewer_rejects_unknown_demo() {
    let err = WasmViewer::create("solar-system", 800, 600).unwrap_err();
    assert!(err.to_string().contains("solar-system"));
}

#[test]
fn viewer_rejects_zero_canvas() {
    assert!(WasmViewer::create("moon-phases", 800, 0).is_err());
}

#[test]
fn viewer_matrices_and_clear_color() {
    let viewer = WasmViewer::create("spinning-cube", 640, 480).unwrap();
    assert_eq!(viewer.view_matrix().len(), 16);
    assert_eq!(viewer.projection_matrix().len(), 16);
    let gray = 0x22 as f32 / 255.0;
    assert_eq!(viewer.clear_color(), vec![gray, gray, gray]);
}

#[test]
fn viewer_mesh_lookup() {
    let viewer = WasmViewer::create("crescent-custom", 640, 480).unwrap();
    assert_eq!(viewer.mesh_count(), 1);
    let mesh = viewer.mesh(0).unwrap();
    assert!(mesh.triangle_count() > 0);
    assert!(viewer.mesh(1).is_none());
}

#[test]
fn viewer_draw_list_json_parses() {
    let viewer = WasmViewer::create("moon-phases", 640, 480).unwrap();
    let json = viewer.draw_list_json_internal().unwrap();
    let items: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(25));
    assert_eq!(items[0]["shading"], "standard");
}

#[test]
fn viewer_state_tracks_frames_and_drag() {
    let mut viewer = WasmViewer::create("moon-phases", 640, 480).unwrap();
    viewer.tick();
    viewer.tick();
    viewer.pointer_down(10.0, 10.0);

    let state = viewer.state();
    assert_eq!(state.demo, "moon-phases");
    assert_eq!(state.frame, 2);
    assert!(state.dragging);
    assert_eq!(state.camera_position, [0.0, 0.0, 15.0]);

    viewer.pointer_up();
    assert!(!viewer.state().dragging);
}

#[test]
fn viewer_resize_updates_projection() {
    let mut viewer = WasmViewer::create("crescent-spheres", 640, 480).unwrap();
    let before = viewer.projection_matrix();
    assert!(viewer.resize(1000, 500).is_ok());
    assert_eq!(viewer.inner().camera().aspect, 2.0);
    assert_ne!(viewer.projection_matrix(), before);
}

#[test]
fn viewer_settings_reject_invalid_fov() {
    for fov in [0.0, 180.0, -5.0] {
        let err = WasmViewer::create_with_settings("moon-phases", 640, 480, fov, 0.1, 100.0, 16)
            .unwrap_err();
        assert_eq!(err, SceneError::Config(config::ConfigError::InvalidFov(fov)));
    }
}

#[test]
fn viewer_settings_reject_bad_clip_planes_and_segments() {
    let create = |near, far, segments| {
        WasmViewer::create_with_settings("crescent-custom", 640, 480, 60.0, near, far, segments)
    };
    assert!(create(0.0, 100.0, 16).is_err());
    assert!(create(1.0, 0.5, 16).is_err());
    assert!(create(0.1, 100.0, 0).is_err());
}

#[test]
fn viewer_settings_apply_fov_and_segments() {
    let viewer =
        WasmViewer::create_with_settings("crescent-custom", 640, 480, 45.0, 0.5, 50.0, 12)
            .unwrap();
    let camera = viewer.inner().camera();
    assert_eq!(camera.fov_degrees, 45.0);
    assert_eq!(camera.near, 0.5);
    assert_eq!(camera.far, 50.0);

    let coarse = viewer.inner().meshes()[0].mesh.vertex_count();
    let default = WasmViewer::create("crescent-custom", 640, 480).unwrap();
    assert!(coarse < default.inner().meshes()[0].mesh.vertex_count());
}

#[test]
fn viewer_settings_still_reject_unknown_demo() {
    let err = WasmViewer::create_with_settings("sun-dial", 640, 480, 60.0, 0.1, 100.0, 8)
        .unwrap_err();
    assert_eq!(err, SceneError::UnknownDemo("sun-dial".to_string()));
}

#[test]
fn green_cube_demo_starts() {
    let viewer = WasmViewer::create("green-cube", 640, 480).unwrap();
    assert_eq!(viewer.mesh_count(), 1);
    assert_eq!(viewer.inner().camera().fov_degrees, 75.0);
    let night = [0.0, 0.0, 0x11 as f32 / 255.0];
    assert_eq!(viewer.clear_color(), night.to_vec());
}
