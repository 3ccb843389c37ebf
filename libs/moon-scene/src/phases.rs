//! # Moon Phases
//!
//! Lunar phases, the angle at which each one places its shadow sphere, and
//! the layout of the twelve-slot phase wheel.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use config::constants::{
    MOON_COLOR, MOON_METALNESS, MOON_ROUGHNESS, PHASE_CUT_OFFSET_RATIO, PHASE_CUT_RADIUS_RATIO,
    PHASE_LABEL_DROP, PHASE_LABEL_SIZE,
};
use crescent_mesh::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::scene::{Geometry, Group, Material, MeshNode, Transform};

/// The eight named phases of the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Wheel slots in layout order. The cycle wraps after eight slots.
pub const PHASE_WHEEL: [MoonPhase; 12] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
];

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Display name, also used as the hover tooltip.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Angle in the XZ plane at which the shadow sphere sits.
    pub fn cut_angle(self) -> f64 {
        match self {
            MoonPhase::New => PI,
            MoonPhase::WaxingCrescent => PI * 0.83,
            MoonPhase::FirstQuarter => PI * 0.67,
            MoonPhase::WaxingGibbous => PI * 0.5,
            MoonPhase::Full => 0.0,
            MoonPhase::WaningGibbous => PI * 1.5,
            MoonPhase::LastQuarter => PI * 1.33,
            MoonPhase::WaningCrescent => PI * 1.17,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of slot `index` out of `count` on a circle in the XY plane.
///
/// Slot 0 sits at angle -π/2, which is the bottom of the wheel when viewed
/// Y-up, and slots advance counter-clockwise.
pub fn wheel_position(index: usize, count: usize, radius: f64) -> DVec3 {
    let angle = index as f64 / count as f64 * TAU - FRAC_PI_2;
    let (sin, cos) = angle.sin_cos();
    DVec3::new(cos * radius, sin * radius, 0.0)
}

/// A moon of `radius` with its shadow sphere placed for `phase`.
///
/// The shadow sphere is invisible; the lit sphere carries the phase name as
/// its tooltip.
pub fn moon_model(phase: MoonPhase, radius: f64, segments: u32) -> Result<Group, MeshError> {
    let moon = MeshNode::new(
        "moon",
        Geometry::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        },
        Material::standard(MOON_COLOR, MOON_ROUGHNESS, MOON_METALNESS),
    )?
    .with_tooltip(phase.name());

    let (sin, cos) = phase.cut_angle().sin_cos();
    let offset = radius * PHASE_CUT_OFFSET_RATIO;
    let shadow = MeshNode::new(
        "shadow",
        Geometry::Sphere {
            radius: radius * PHASE_CUT_RADIUS_RATIO,
            width_segments: segments,
            height_segments: segments,
        },
        Material::invisible(),
    )?
    .with_transform(Transform::from_translation(DVec3::new(cos * offset, 0.0, sin * offset)));

    Ok(Group::new(phase.name()).with_child(moon).with_child(shadow))
}

/// Marker box hanging below a wheel slot.
pub fn label_marker(phase: MoonPhase, slot: DVec3) -> Result<MeshNode, MeshError> {
    let geometry = Geometry::Box {
        width: PHASE_LABEL_SIZE,
        height: PHASE_LABEL_SIZE,
        depth: PHASE_LABEL_SIZE,
    };
    Ok(
        MeshNode::new(format!("{} label", phase.name()), geometry, Material::basic(0xffffff))?
            .with_transform(Transform::from_translation(slot - DVec3::Y * PHASE_LABEL_DROP)),
    )
}
