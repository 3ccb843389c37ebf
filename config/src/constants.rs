//! # Configuration Constants
//!
//! Centralized constants for the lunar viewer. Tessellation defaults,
//! camera parameters, pointer sensitivities, animation rates and scene
//! colours are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Ray intersection tolerance
//! - **Tessellation**: Crescent and sphere resolution defaults
//! - **Camera**: Projection and orbit parameters
//! - **Animation**: Per-frame spin increments
//! - **Scene**: Colours, light rig and moon-phase layout

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for ray intersection tests.
///
/// Rays nearly parallel to a triangle plane are treated as misses.
pub const RAY_EPSILON: f64 = 1e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default outer radius of a procedurally built crescent.
pub const DEFAULT_CRESCENT_OUTER_RADIUS: f64 = 1.0;

/// Default radius of the cut-out sphere carved from a crescent.
pub const DEFAULT_CRESCENT_INNER_RADIUS: f64 = 0.7;

/// Default x offset of the cut-out sphere's centre.
pub const DEFAULT_CRESCENT_CUT_OFFSET: f64 = 0.3;

/// Default angular subdivision count for crescents and spheres.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let requested: Option<u32> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_SEGMENTS), 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Minimum longitudinal segments for a UV sphere.
pub const MIN_SPHERE_WIDTH_SEGMENTS: u32 = 3;

/// Minimum latitudinal segments for a UV sphere.
pub const MIN_SPHERE_HEIGHT_SEGMENTS: u32 = 2;

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1089; // crescent grid at 32 segments
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Vertical field of view used by the demos, in degrees.
pub const DEFAULT_FOV_DEGREES: f64 = 60.0;

/// Vertical field of view of the green cube demo, in degrees.
pub const GREEN_CUBE_FOV_DEGREES: f64 = 75.0;

/// Near clip plane distance.
pub const DEFAULT_NEAR: f64 = 0.1;

/// Far clip plane distance.
pub const DEFAULT_FAR: f64 = 1000.0;

/// Radians of camera rotation per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Orbit pitch limit (±60°), keeps the camera off the poles.
pub const ORBIT_PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_3;

/// Distance of the orbit camera from the moon wheel centre.
pub const ORBIT_DISTANCE: f64 = 15.0;

/// Radius of the cube demo's turntable camera path.
pub const TURNTABLE_RADIUS: f64 = 2.0;

/// Lowest camera height on the turntable.
pub const TURNTABLE_MIN_HEIGHT: f64 = 0.5;

/// Highest camera height on the turntable.
pub const TURNTABLE_MAX_HEIGHT: f64 = 5.0;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Per-frame rotation of the spinning cube around x and y, in radians.
pub const CUBE_SPIN_PER_FRAME: f64 = 0.01;

/// Per-frame rotation of a single crescent around y, in radians.
pub const CRESCENT_SPIN_PER_FRAME: f64 = 0.005;

/// Per-frame rotation of the moon-phase wheel around y, in radians.
pub const WHEEL_SPIN_PER_FRAME: f64 = 0.002;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Night-sky clear colour used by the moon demos.
pub const NIGHT_SKY_COLOR: u32 = 0x000011;

/// Clear colour of the spinning cube demo.
pub const CUBE_CLEAR_COLOR: u32 = 0x222222;

/// Surface colour of every moon.
pub const MOON_COLOR: u32 = 0xf4f4f4;

/// Moon surface roughness.
pub const MOON_ROUGHNESS: f64 = 0.8;

/// Moon surface metalness.
pub const MOON_METALNESS: f64 = 0.1;

/// Colour of the spinning cube.
pub const CUBE_COLOR: u32 = 0xff8c00;

/// Colour of the green cube.
pub const GREEN_CUBE_COLOR: u32 = 0x00ff00;

/// Ambient light colour.
pub const AMBIENT_LIGHT_COLOR: u32 = 0x404040;

/// Ambient light intensity for the moon demos.
pub const MOON_AMBIENT_INTENSITY: f64 = 0.3;

/// Ambient light intensity for the cube demo.
pub const CUBE_AMBIENT_INTENSITY: f64 = 0.5;

/// Directional light colour.
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;

/// Directional light intensity.
pub const DIRECTIONAL_LIGHT_INTENSITY: f64 = 1.0;

/// Directional light position, shared by all demos.
pub const DIRECTIONAL_LIGHT_POSITION: [f64; 3] = [5.0, 5.0, 5.0];

/// Radius of the circle the moon-phase models sit on.
pub const WHEEL_RADIUS: f64 = 8.0;

/// Radius of each moon-phase model.
pub const PHASE_MOON_RADIUS: f64 = 0.8;

/// Cut-out sphere radius as a fraction of the moon radius.
pub const PHASE_CUT_RADIUS_RATIO: f64 = 0.9;

/// Cut-out sphere offset as a fraction of the moon radius.
pub const PHASE_CUT_OFFSET_RATIO: f64 = 0.3;

/// Vertical offset of each phase's label marker below its moon.
pub const PHASE_LABEL_DROP: f64 = 1.5;

/// Edge length of a label marker cube.
pub const PHASE_LABEL_SIZE: f64 = 0.1;

/// Colour of the wheel's centre marker.
pub const WHEEL_CENTER_COLOR: u32 = 0x444444;

/// Radius of the wheel's centre marker.
pub const WHEEL_CENTER_RADIUS: f64 = 0.2;

/// Segments used for the wheel's centre marker.
pub const WHEEL_CENTER_SEGMENTS: u32 = 16;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Splits a packed `0xRRGGBB` colour into normalised RGB components.
///
/// # Example
///
/// ```rust
/// use config::constants::color_to_rgb;
///
/// assert_eq!(color_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
/// ```
pub fn color_to_rgb(color: u32) -> [f32; 3] {
    let r = ((color >> 16) & 0xff) as f32 / 255.0;
    let g = ((color >> 8) & 0xff) as f32 / 255.0;
    let b = (color & 0xff) as f32 / 255.0;
    [r, g, b]
}
