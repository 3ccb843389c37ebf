//! # Camera Controls
//!
//! Pointer-driven camera rigs. Each rig owns its drag state; feeding it
//! pointer events yields the new camera position, which the caller applies
//! and then points back at the origin.
//!
//! ## Rigs
//!
//! - **Orbit**: accumulates yaw/pitch on a sphere of fixed distance
//! - **Turntable**: swings the camera round a fixed circle, height follows
//!   vertical drag
//! - **Fixed**: ignores the pointer

use config::constants::{
    DRAG_SENSITIVITY, ORBIT_DISTANCE, ORBIT_PITCH_LIMIT, TURNTABLE_MAX_HEIGHT,
    TURNTABLE_MIN_HEIGHT, TURNTABLE_RADIUS,
};
use glam::{DVec2, DVec3};

// =============================================================================
// Drag state
// =============================================================================

/// Press/release state plus the last pointer position seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    dragging: bool,
    last: DVec2,
}

impl PointerDrag {
    /// Starts a drag at `(x, y)`.
    pub fn press(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last = DVec2::new(x, y);
    }

    /// Returns the movement since the last event and records `(x, y)`.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<DVec2> {
        if !self.dragging {
            return None;
        }
        let current = DVec2::new(x, y);
        let delta = current - self.last;
        self.last = current;
        Some(delta)
    }

    /// Ends the drag.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// True between press and release.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

// =============================================================================
// Orbit
// =============================================================================

/// Orbit rig used by the phase wheel.
///
/// # Example
///
/// ```rust
/// use moon_scene::controls::OrbitControls;
///
/// let mut orbit = OrbitControls::default();
/// orbit.pointer_down(0.0, 0.0);
/// let position = orbit.pointer_move(0.0, 10_000.0).unwrap();
/// // pitch is clamped, so the camera never passes over the pole
/// assert!(orbit.pitch() <= std::f64::consts::FRAC_PI_3);
/// assert!(position.y < 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    drag: PointerDrag,
    yaw: f64,
    pitch: f64,
    /// Distance from the origin.
    pub distance: f64,
    /// Radians per pixel.
    pub sensitivity: f64,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`.
    pub pitch_limit: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(ORBIT_DISTANCE)
    }
}

impl OrbitControls {
    pub fn new(distance: f64) -> Self {
        Self {
            drag: PointerDrag::default(),
            yaw: 0.0,
            pitch: 0.0,
            distance,
            sensitivity: DRAG_SENSITIVITY,
            pitch_limit: ORBIT_PITCH_LIMIT,
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag.press(x, y);
    }

    /// Applies a pointer move; returns the new camera position while
    /// dragging.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<DVec3> {
        let delta = self.drag.drag_to(x, y)?;
        self.yaw += delta.x * self.sensitivity;
        self.pitch = (self.pitch + delta.y * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
        Some(self.position())
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    /// Camera position for the current yaw and pitch.
    pub fn position(&self) -> DVec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        DVec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }
}

// =============================================================================
// Turntable
// =============================================================================

/// Turntable rig used by the cube demo.
///
/// The horizontal angle comes from the movement of the latest event only,
/// not from an accumulated angle, so slow drags keep the camera near +X.
#[derive(Debug, Clone, PartialEq)]
pub struct TurntableControls {
    drag: PointerDrag,
    /// Radius of the circle the camera travels on.
    pub radius: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub sensitivity: f64,
}

impl Default for TurntableControls {
    fn default() -> Self {
        Self {
            drag: PointerDrag::default(),
            radius: TURNTABLE_RADIUS,
            min_height: TURNTABLE_MIN_HEIGHT,
            max_height: TURNTABLE_MAX_HEIGHT,
            sensitivity: DRAG_SENSITIVITY,
        }
    }
}

impl TurntableControls {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag.press(x, y);
    }

    /// Applies a pointer move given the camera's current position.
    pub fn pointer_move(&mut self, x: f64, y: f64, current: DVec3) -> Option<DVec3> {
        let delta = self.drag.drag_to(x, y)?;
        let (sin, cos) = (delta.x * self.sensitivity).sin_cos();
        let height = (current.y - delta.y * self.sensitivity)
            .clamp(self.min_height, self.max_height);
        Some(DVec3::new(cos * self.radius, height, sin * self.radius))
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Camera rig attached to a demo.
#[derive(Debug, Clone, PartialEq)]
pub enum Controls {
    Orbit(OrbitControls),
    Turntable(TurntableControls),
    Fixed,
}

impl Controls {
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        match self {
            Controls::Orbit(orbit) => orbit.pointer_down(x, y),
            Controls::Turntable(turntable) => turntable.pointer_down(x, y),
            Controls::Fixed => {}
        }
    }

    /// Returns the new camera position, or `None` if the camera stays put.
    pub fn pointer_move(&mut self, x: f64, y: f64, current: DVec3) -> Option<DVec3> {
        match self {
            Controls::Orbit(orbit) => orbit.pointer_move(x, y),
            Controls::Turntable(turntable) => turntable.pointer_move(x, y, current),
            Controls::Fixed => None,
        }
    }

    pub fn pointer_up(&mut self) {
        match self {
            Controls::Orbit(orbit) => orbit.pointer_up(),
            Controls::Turntable(turntable) => turntable.pointer_up(),
            Controls::Fixed => {}
        }
    }

    pub fn is_dragging(&self) -> bool {
        match self {
            Controls::Orbit(orbit) => orbit.is_dragging(),
            Controls::Turntable(turntable) => turntable.is_dragging(),
            Controls::Fixed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut orbit = OrbitControls::default();
        assert!(orbit.pointer_move(10.0, 10.0).is_none());
        assert_eq!(orbit.yaw(), 0.0);

        let mut turntable = TurntableControls::default();
        assert!(turntable.pointer_move(10.0, 10.0, DVec3::splat(2.0)).is_none());
    }

    #[test]
    fn test_release_stops_drag() {
        let mut orbit = OrbitControls::default();
        orbit.pointer_down(0.0, 0.0);
        assert!(orbit.is_dragging());
        orbit.pointer_up();
        assert!(!orbit.is_dragging());
        assert!(orbit.pointer_move(50.0, 0.0).is_none());
    }

    #[test]
    fn test_orbit_accumulates_yaw() {
        let mut orbit = OrbitControls::default();
        orbit.pointer_down(100.0, 100.0);
        orbit.pointer_move(150.0, 100.0);
        orbit.pointer_move(200.0, 100.0);
        assert_relative_eq!(orbit.yaw(), 1.0, epsilon = 1e-12);
        assert_eq!(orbit.pitch(), 0.0);
    }

    #[test]
    fn test_orbit_position_keeps_distance() {
        let mut orbit = OrbitControls::default();
        orbit.pointer_down(0.0, 0.0);
        let position = orbit.pointer_move(37.0, -52.0).unwrap();
        assert_relative_eq!(position.length(), ORBIT_DISTANCE, epsilon = 1e-9);
        assert_relative_eq!(position.y, ORBIT_DISTANCE * (-0.52f64).sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_pitch_clamped_both_ways() {
        let mut orbit = OrbitControls::default();
        orbit.pointer_down(0.0, 0.0);
        orbit.pointer_move(0.0, 1_000.0);
        assert_relative_eq!(orbit.pitch(), ORBIT_PITCH_LIMIT);
        orbit.pointer_move(0.0, -2_000.0);
        assert_relative_eq!(orbit.pitch(), -ORBIT_PITCH_LIMIT);
    }

    #[test]
    fn test_orbit_starts_on_positive_z() {
        let orbit = OrbitControls::default();
        assert_eq!(orbit.position(), DVec3::new(0.0, 0.0, ORBIT_DISTANCE));
    }

    #[test]
    fn test_turntable_uses_event_delta() {
        let mut turntable = TurntableControls::default();
        turntable.pointer_down(0.0, 0.0);
        let first = turntable.pointer_move(100.0, 0.0, DVec3::splat(2.0)).unwrap();
        assert_relative_eq!(first.x, 1.0f64.cos() * TURNTABLE_RADIUS, epsilon = 1e-12);
        assert_relative_eq!(first.z, 1.0f64.sin() * TURNTABLE_RADIUS, epsilon = 1e-12);

        // A second small step lands near +X again rather than further round.
        let second = turntable.pointer_move(101.0, 0.0, first).unwrap();
        assert_relative_eq!(second.x, 0.01f64.cos() * TURNTABLE_RADIUS, epsilon = 1e-12);
    }

    #[test]
    fn test_turntable_height_clamped() {
        let mut turntable = TurntableControls::default();
        turntable.pointer_down(0.0, 0.0);
        let low = turntable.pointer_move(0.0, 1_000.0, DVec3::splat(2.0)).unwrap();
        assert_eq!(low.y, TURNTABLE_MIN_HEIGHT);
        let high = turntable.pointer_move(0.0, -1_000.0, low).unwrap();
        assert_eq!(high.y, TURNTABLE_MAX_HEIGHT);
    }

    #[test]
    fn test_fixed_controls_never_move() {
        let mut fixed = Controls::Fixed;
        fixed.pointer_down(0.0, 0.0);
        assert!(!fixed.is_dragging());
        assert!(fixed.pointer_move(10.0, 10.0, DVec3::ONE).is_none());
    }
}
