//! [`PhysicsWorld`] backed by bevy_rapier2d.
//!
//! Body state is copied out of the ECS components before the tick and
//! written back afterwards; overlap queries go straight to the
//! [`RapierContext`] query pipeline.

use bevy::prelude::{Entity, GlobalTransform, Query, Vec2};
use bevy_rapier2d::prelude::{Collider, CollisionGroups, Group, QueryFilter, RapierContext};
use mb_common::components::metal::MetalBlock;

use crate::physics::{Aabb, MagnetTarget, PhysicsWorld, TargetHandle};
use crate::sensors::SurfaceMask;

pub type MagnetQuery<'w, 's> = Query<'w, 's, (&'static GlobalTransform, &'static MetalBlock)>;

/// Copy of the character body's simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub force: Vec2,
    pub gravity_scale: f32,
    pub mass: f32,
    /// Set when the controller moved the body directly.
    pub teleported: bool,
}

pub struct RapierWorld<'a, 'w, 's> {
    context: &'a RapierContext,
    magnets: &'a MagnetQuery<'w, 's>,
    body: Entity,
    state: BodyState,
}

impl<'a, 'w, 's> RapierWorld<'a, 'w, 's> {
    pub fn new(
        context: &'a RapierContext,
        magnets: &'a MagnetQuery<'w, 's>,
        body: Entity,
        state: BodyState,
    ) -> Self {
        Self { context, magnets, body, state }
    }

    pub fn into_body_state(self) -> BodyState {
        self.state
    }

    fn filter(&self, mask: SurfaceMask) -> QueryFilter<'static> {
        QueryFilter::new()
            .groups(CollisionGroups::new(Group::ALL, Group::from_bits_truncate(mask.bits())))
            .exclude_rigid_body(self.body)
            .exclude_collider(self.body)
    }

    fn target(&self, entity: Entity) -> Option<MagnetTarget> {
        let (transform, block) = self.magnets.get(entity).ok()?;
        let position = transform.translation().truncate();

        Some(MagnetTarget {
            handle: TargetHandle(entity),
            position,
            bounds: Aabb::from_center(position, block.half_extents),
        })
    }
}

impl PhysicsWorld for RapierWorld<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.state.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
        self.state.teleported = true;
    }

    fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.state.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.state.force = force;
    }

    fn gravity_scale(&self) -> f32 {
        self.state.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.state.gravity_scale = scale;
    }

    fn mass(&self) -> f32 {
        self.state.mass
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool {
        if mask == SurfaceMask::NONE {
            return false;
        }

        let shape = Collider::ball(radius);
        self.context
            .intersection_with_shape(center, 0.0, &shape, self.filter(mask))
            .is_some()
    }

    fn magnets_in_circle(&self, center: Vec2, radius: f32) -> Vec<MagnetTarget> {
        let shape = Collider::ball(radius);
        let mut found = Vec::new();

        self.context.intersections_with_shape(
            center,
            0.0,
            &shape,
            self.filter(SurfaceMask::METAL),
            |entity| {
                if let Some(target) = self.target(entity) {
                    found.push(target);
                }
                true
            },
        );

        found
    }

    fn magnet(&self, handle: TargetHandle) -> Option<MagnetTarget> {
        self.target(handle.0)
    }
}
