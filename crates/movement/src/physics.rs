//! Physics world abstraction.
//!
//! The controller never integrates anything itself. It reads the body's
//! state, queries overlaps, and hands a single summed force back to whatever
//! rigid-body simulation implements [`PhysicsWorld`]. The Rapier
//! implementation lives in [`crate::rapier`]; tests use an in-memory world.

use bevy::prelude::{Entity, Vec2};

use crate::sensors::SurfaceMask;

/// Non-owning, generation-checked reference to a magnetic object.
///
/// The environment owns the object. Resolve the handle through
/// [`PhysicsWorld::magnet`] every time it is used; a handle whose object is
/// gone resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub Entity);

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Closest point of the box to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) <= radius * radius
    }
}

/// Snapshot of a magnetic object as seen this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetTarget {
    pub handle: TargetHandle,
    pub position: Vec2,
    pub bounds: Aabb,
}

/// The rigid-body service the controller drives.
///
/// One implementation wraps one character body plus read access to the
/// world around it.
pub trait PhysicsWorld {
    /// Current world position of the character body.
    fn position(&self) -> Vec2;

    /// Teleport the body.
    fn set_position(&mut self, position: Vec2);

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Set the force acting on the body for the next physics step.
    ///
    /// Called exactly once per tick with the sum of every contribution.
    fn apply_force(&mut self, force: Vec2);

    fn gravity_scale(&self) -> f32;

    fn set_gravity_scale(&mut self, scale: f32);

    /// Mass of the body, used to turn velocity rates into forces.
    fn mass(&self) -> f32 {
        1.0
    }

    /// Whether any collider in `mask` overlaps the circle.
    fn overlap_circle(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool;

    /// Every magnetic object overlapping the circle, in the order the
    /// world encounters them.
    fn magnets_in_circle(&self, center: Vec2, radius: f32) -> Vec<MagnetTarget>;

    /// Resolve a handle. `None` when the object no longer exists.
    fn magnet(&self, handle: TargetHandle) -> Option<MagnetTarget>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_orders_corners() {
        let aabb = Aabb::new(Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn aabb_circle_intersection() {
        let aabb = Aabb::from_center(Vec2::ZERO, Vec2::splat(1.0));

        assert!(aabb.intersects_circle(Vec2::ZERO, 0.1));
        assert!(aabb.intersects_circle(Vec2::new(2.0, 0.0), 1.0));
        assert!(!aabb.intersects_circle(Vec2::new(2.0, 2.0), 1.0));
    }
}
