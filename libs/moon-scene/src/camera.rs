//! # Camera and Viewport
//!
//! Perspective camera with a cached projection matrix and the viewport it
//! renders into. Uses a Y-up, right-handed coordinate system with OpenGL
//! clip space, which is what the browser renderer expects.

use config::viewer::ViewerConfig;
use crescent_mesh::{MeshError, Ray};
use glam::{DMat4, DVec2, DVec3};

use crate::error::SceneError;

/// Pixel size of the drawing surface.
///
/// # Example
///
/// ```rust
/// use moon_scene::camera::Viewport;
///
/// let viewport = Viewport::new(800, 400).unwrap();
/// assert_eq!(viewport.aspect(), 2.0);
/// assert!(Viewport::new(800, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport, rejecting zero-sized surfaces.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Converts a pointer position (pixels, origin top-left, y down) into
    /// normalised device coordinates (origin centre, y up).
    pub fn to_ndc(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(
            x / self.width as f64 * 2.0 - 1.0,
            -(y / self.height as f64) * 2.0 + 1.0,
        )
    }

    /// Inverse of [`Viewport::to_ndc`].
    pub fn from_ndc(&self, ndc: DVec2) -> DVec2 {
        DVec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f64,
            (1.0 - ndc.y) * 0.5 * self.height as f64,
        )
    }
}

/// Perspective camera.
///
/// The projection matrix is cached; call
/// [`PerspectiveCamera::update_projection_matrix`] after changing the
/// projection parameters directly. [`PerspectiveCamera::set_aspect`] does it
/// for you.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Width over height.
    pub aspect: f64,
    /// Near clip plane.
    pub near: f64,
    /// Far clip plane.
    pub far: f64,
    position: DVec3,
    target: DVec3,
    up: DVec3,
    projection: DMat4,
}

impl PerspectiveCamera {
    /// Creates a camera at the origin looking down -Z.
    pub fn new(config: &ViewerConfig, aspect: f64) -> Self {
        let mut camera = Self {
            fov_degrees: config.fov_degrees,
            aspect,
            near: config.near,
            far: config.far,
            position: DVec3::ZERO,
            target: DVec3::NEG_Z,
            up: DVec3::Y,
            projection: DMat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Point the camera looks at.
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Moves the camera, keeping its viewing direction.
    pub fn set_position(&mut self, position: DVec3) {
        let direction = self.target - self.position;
        self.position = position;
        self.target = position + direction;
    }

    /// Turns the camera towards `target`.
    pub fn look_at(&mut self, target: DVec3) {
        self.target = target;
    }

    /// Updates the aspect ratio and refreshes the projection.
    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Recomputes the cached projection matrix.
    pub fn update_projection_matrix(&mut self) {
        let fov = self.fov_degrees.to_radians();
        self.projection = DMat4::perspective_rh_gl(fov, self.aspect, self.near, self.far);
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Cached view-to-clip matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    /// Combined world-to-clip matrix.
    pub fn view_projection(&self) -> DMat4 {
        self.projection * self.view_matrix()
    }

    /// Builds the world-space ray under a pointer position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::viewer::ViewerConfig;
    /// use glam::DVec3;
    /// use moon_scene::camera::{PerspectiveCamera, Viewport};
    ///
    /// let viewport = Viewport::new(640, 480).unwrap();
    /// let mut camera = PerspectiveCamera::new(&ViewerConfig::default(), viewport.aspect());
    /// camera.set_position(DVec3::new(0.0, 0.0, 10.0));
    /// camera.look_at(DVec3::ZERO);
    ///
    /// let ray = camera.screen_ray(&viewport, 320.0, 240.0).unwrap();
    /// assert!(ray.direction().abs_diff_eq(DVec3::NEG_Z, 1e-9));
    /// ```
    pub fn screen_ray(&self, viewport: &Viewport, x: f64, y: f64) -> Result<Ray, MeshError> {
        let ndc = viewport.to_ndc(x, y);
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(DVec3::new(ndc.x, ndc.y, -1.0));
        let far = inverse.project_point3(DVec3::new(ndc.x, ndc.y, 1.0));
        Ray::towards(near, far)
    }

    /// Projects a world point to pointer coordinates.
    ///
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, viewport: &Viewport, point: DVec3) -> Option<DVec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = DVec2::new(clip.x / clip.w, clip.y / clip.w);
        Some(viewport.from_ndc(ndc))
    }
}
