//! Sensor grid.
//!
//! A fixed table of circles attached to the character. Every physics tick
//! each circle is tested against the colliders of its surface class and the
//! results become the [`EnvironmentFacts`] every other component reads.

use std::ops::BitOr;

use bevy::prelude::Vec2;
use mb_util::constants::{
    CEILING_CHECK_RADIUS, GROUND_CHECK_RADIUS, GROUP_GROUND, GROUP_HAZARD, GROUP_METAL, GROUP_WIN,
    METAL_CHECK_RADIUS, METAL_SENSOR_REACH, PLAYER_HALF_WIDTH, SENSOR_VERTICAL_OFFSET,
    TRIGGER_CHECK_RADIUS,
};
use crate::error::ConfigError;
use crate::physics::PhysicsWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Ground,
    Ceiling,
    MetalUnderfoot,
    MetalAbove,
    MetalFront,
    MetalRear,
    Hazard,
    Win,
}

impl SensorKind {
    pub const ALL: [SensorKind; 8] = [
        SensorKind::Ground,
        SensorKind::Ceiling,
        SensorKind::MetalUnderfoot,
        SensorKind::MetalAbove,
        SensorKind::MetalFront,
        SensorKind::MetalRear,
        SensorKind::Hazard,
        SensorKind::Win,
    ];
}

/// Set of surface classes a query matches, one bit per collision group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceMask(pub u32);

impl SurfaceMask {
    pub const NONE: SurfaceMask = SurfaceMask(0);
    pub const GROUND: SurfaceMask = SurfaceMask(GROUP_GROUND);
    pub const METAL: SurfaceMask = SurfaceMask(GROUP_METAL);
    pub const HAZARD: SurfaceMask = SurfaceMask(GROUP_HAZARD);
    pub const WIN: SurfaceMask = SurfaceMask(GROUP_WIN);

    /// Anything the character can stand on.
    pub const SOLID: SurfaceMask = SurfaceMask(GROUP_GROUND | GROUP_METAL);

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn intersects(self, other: SurfaceMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for SurfaceMask {
    type Output = SurfaceMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        SurfaceMask(self.0 | rhs.0)
    }
}

/// One sensor: a circle at a local offset testing one mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSpec {
    pub kind: SensorKind,
    /// Offset from the body center while facing right. Mirrored on X when
    /// facing left.
    pub offset: Vec2,
    pub radius: f32,
    pub mask: SurfaceMask,
}

impl SensorSpec {
    pub fn new(kind: SensorKind, offset: Vec2, radius: f32, mask: SurfaceMask) -> Self {
        Self { kind, offset, radius, mask }
    }

    pub fn world_position(&self, origin: Vec2, facing_right: bool) -> Vec2 {
        let mut offset = self.offset;
        if !facing_right {
            offset.x = -offset.x;
        }
        origin + offset
    }
}

/// Environment facts for one physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFacts {
    pub grounded: bool,
    pub on_ceiling: bool,
    pub metal_underfoot: bool,
    pub metal_above: bool,
    pub metal_front: bool,
    pub metal_rear: bool,
    pub on_hazard: bool,
    pub on_win: bool,
}

impl EnvironmentFacts {
    /// True when any of the four directional metal sensors fires.
    pub fn touching_metal(&self) -> bool {
        self.metal_underfoot || self.metal_above || self.metal_front || self.metal_rear
    }

    fn set(&mut self, kind: SensorKind, value: bool) {
        match kind {
            SensorKind::Ground => self.grounded = value,
            SensorKind::Ceiling => self.on_ceiling = value,
            SensorKind::MetalUnderfoot => self.metal_underfoot = value,
            SensorKind::MetalAbove => self.metal_above = value,
            SensorKind::MetalFront => self.metal_front = value,
            SensorKind::MetalRear => self.metal_rear = value,
            SensorKind::Hazard => self.on_hazard = value,
            SensorKind::Win => self.on_win = value,
        }
    }
}

/// Validated sensor table.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGrid {
    specs: Vec<SensorSpec>,
}

impl SensorGrid {
    /// Build a grid, failing on a non-positive radius or on any sensor kind
    /// that is missing or repeated.
    pub fn new(specs: Vec<SensorSpec>) -> Result<Self, ConfigError> {
        for spec in &specs {
            if !(spec.radius.is_finite() && spec.radius > 0.0) {
                return Err(ConfigError::InvalidSensorRadius {
                    sensor: spec.kind,
                    radius: spec.radius,
                });
            }
        }

        for kind in SensorKind::ALL {
            match specs.iter().filter(|spec| spec.kind == kind).count() {
                0 => return Err(ConfigError::MissingSensor(kind)),
                1 => (),
                _ => return Err(ConfigError::DuplicateSensor(kind)),
            }
        }

        Ok(Self { specs })
    }

    /// The default layout for the player body.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(standard_specs())
    }

    pub fn specs(&self) -> &[SensorSpec] {
        &self.specs
    }

    pub fn spec(&self, kind: SensorKind) -> Option<&SensorSpec> {
        self.specs.iter().find(|spec| spec.kind == kind)
    }

    /// Poll every sensor once.
    pub fn refresh<W: PhysicsWorld + ?Sized>(
        &self,
        world: &W,
        origin: Vec2,
        facing_right: bool,
    ) -> EnvironmentFacts {
        let mut facts = EnvironmentFacts::default();

        for spec in &self.specs {
            let center = spec.world_position(origin, facing_right);
            facts.set(spec.kind, world.overlap_circle(center, spec.radius, spec.mask));
        }

        facts
    }
}

pub fn standard_specs() -> Vec<SensorSpec> {
    let feet = SENSOR_VERTICAL_OFFSET;
    let metal_reach_y = SENSOR_VERTICAL_OFFSET + METAL_SENSOR_REACH;
    let metal_reach_x = PLAYER_HALF_WIDTH + METAL_SENSOR_REACH;

    vec![
        SensorSpec::new(SensorKind::Ground, Vec2::new(0.0, -feet), GROUND_CHECK_RADIUS, SurfaceMask::SOLID),
        SensorSpec::new(SensorKind::Ceiling, Vec2::new(0.0, feet), CEILING_CHECK_RADIUS, SurfaceMask::SOLID),
        SensorSpec::new(SensorKind::MetalUnderfoot, Vec2::new(0.0, -metal_reach_y), METAL_CHECK_RADIUS, SurfaceMask::METAL),
        SensorSpec::new(SensorKind::MetalAbove, Vec2::new(0.0, metal_reach_y), METAL_CHECK_RADIUS, SurfaceMask::METAL),
        SensorSpec::new(SensorKind::MetalFront, Vec2::new(metal_reach_x, 0.0), METAL_CHECK_RADIUS, SurfaceMask::METAL),
        SensorSpec::new(SensorKind::MetalRear, Vec2::new(-metal_reach_x, 0.0), METAL_CHECK_RADIUS, SurfaceMask::METAL),
        SensorSpec::new(SensorKind::Hazard, Vec2::new(0.0, -feet + TRIGGER_CHECK_RADIUS), TRIGGER_CHECK_RADIUS, SurfaceMask::HAZARD),
        SensorSpec::new(SensorKind::Win, Vec2::ZERO, TRIGGER_CHECK_RADIUS, SurfaceMask::WIN),
    ]
}
