#![allow(dead_code)]

use bevy::prelude::{Entity, Vec2};
use mb_common::events::LevelCommand;
use mb_movement::prelude::*;

pub const DT: f32 = 1.0 / 60.0;

/// In-memory stand-in for the rigid-body simulation.
///
/// Surfaces and magnets are plain boxes; overlap queries test circles
/// against them directly.
#[derive(Debug, Default)]
pub struct MockWorld {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub mass: f32,
    pub gravity: f32,
    pub surfaces: Vec<(Aabb, SurfaceMask)>,
    pub magnets: Vec<MagnetTarget>,
    pub forces: Vec<Vec2>,
}

impl MockWorld {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            gravity_scale: 1.0,
            mass: 1.0,
            ..Default::default()
        }
    }

    pub fn with_surface(mut self, center: Vec2, half_extents: Vec2, mask: SurfaceMask) -> Self {
        self.surfaces.push((Aabb::from_center(center, half_extents), mask));
        self
    }

    /// A floor whose top edge sits just under the character's feet.
    pub fn with_floor(self) -> Self {
        let center = self.position - Vec2::new(0.0, 14.0);
        self.with_surface(center, Vec2::new(50.0, 5.0), SurfaceMask::GROUND)
    }

    /// Adds a metal block, which is both a magnet and a solid surface.
    pub fn with_magnet(mut self, id: u32, center: Vec2, half_extents: Vec2) -> Self {
        self.surfaces.push((Aabb::from_center(center, half_extents), SurfaceMask::METAL));
        self.magnets.push(MagnetTarget {
            handle: handle(id),
            position: center,
            bounds: Aabb::from_center(center, half_extents),
        });
        self
    }

    pub fn remove_magnet(&mut self, id: u32) {
        let removed = handle(id);
        let bounds: Vec<Aabb> = self
            .magnets
            .iter()
            .filter(|magnet| magnet.handle == removed)
            .map(|magnet| magnet.bounds)
            .collect();

        self.magnets.retain(|magnet| magnet.handle != removed);
        self.surfaces.retain(|(aabb, mask)| !(*mask == SurfaceMask::METAL && bounds.contains(aabb)));
    }

    pub fn last_force(&self) -> Vec2 {
        self.forces.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Semi-implicit Euler step with the last applied force.
    pub fn step(&mut self, dt: f32) {
        let acceleration = self.last_force() / self.mass + Vec2::new(0.0, self.gravity * self.gravity_scale);
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

impl PhysicsWorld for MockWorld {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.forces.push(force);
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool {
        self.surfaces
            .iter()
            .any(|(aabb, surface)| surface.intersects(mask) && aabb.intersects_circle(center, radius))
    }

    fn magnets_in_circle(&self, center: Vec2, radius: f32) -> Vec<MagnetTarget> {
        self.magnets
            .iter()
            .filter(|magnet| magnet.bounds.intersects_circle(center, radius))
            .copied()
            .collect()
    }

    fn magnet(&self, handle: TargetHandle) -> Option<MagnetTarget> {
        self.magnets.iter().find(|magnet| magnet.handle == handle).copied()
    }
}

pub fn handle(id: u32) -> TargetHandle {
    TargetHandle(Entity::from_raw(id))
}

pub fn controller(config: ControllerConfig, spawn: Vec2) -> CharacterController {
    CharacterController::new(config, SensorGrid::standard().unwrap(), spawn, 1.0).unwrap()
}

/// Latch `intent` for one frame and run one physics tick.
pub fn tick(
    controller: &mut CharacterController,
    world: &mut MockWorld,
    level: &mut Vec<LevelCommand>,
    intent: Intent,
) -> ControllerOutput {
    controller.on_frame_tick(intent, level);
    controller.on_physics_tick(world, level).clone()
}
