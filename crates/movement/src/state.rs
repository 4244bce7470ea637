//! Character state owned by the controller.

use bevy::prelude::Vec2;

use crate::math::{facing_direction, facing_sign};
use crate::physics::TargetHandle;
use crate::sensors::EnvironmentFacts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnetState {
    #[default]
    Idle,
    Push,
    Pull,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing_right: bool,
    pub crouching: bool,
    /// Refreshed once per physics tick, before anything reads it.
    pub facts: EnvironmentFacts,
    pub magnet_state: MagnetState,
    /// Set only together with a transition into Push or Pull.
    pub active_target: Option<TargetHandle>,
    /// Gravity scale the body had when the controller was created.
    pub base_gravity_scale: f32,
    /// Frozen after touching the win zone, until the level reloads.
    pub won: bool,
}

impl CharacterState {
    pub fn new(spawn: Vec2, facing_right: bool, base_gravity_scale: f32) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            facing_right,
            crouching: false,
            facts: EnvironmentFacts::default(),
            magnet_state: MagnetState::Idle,
            active_target: None,
            base_gravity_scale,
            won: false,
        }
    }

    #[inline]
    pub fn facing_sign(&self) -> f32 {
        facing_sign(self.facing_right)
    }

    #[inline]
    pub fn facing_direction(&self) -> Vec2 {
        facing_direction(self.facing_right)
    }

    pub fn is_magnet_engaged(&self) -> bool {
        self.magnet_state != MagnetState::Idle
    }

    /// Drop the magnet lock and return to Idle.
    pub fn release_magnet(&mut self) {
        self.magnet_state = MagnetState::Idle;
        self.active_target = None;
    }

    /// Put the character back at `spawn` as it was when first created.
    pub fn reset_to_spawn(&mut self, spawn: Vec2, facing_right: bool) {
        self.position = spawn;
        self.velocity = Vec2::ZERO;
        self.facing_right = facing_right;
        self.crouching = false;
        self.facts = EnvironmentFacts::default();
        self.release_magnet();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::Entity;

    #[test]
    fn new_state_is_idle_at_spawn() {
        let state = CharacterState::new(Vec2::new(3.0, 4.0), true, 2.0);
        assert_eq!(state.position, Vec2::new(3.0, 4.0));
        assert_eq!(state.magnet_state, MagnetState::Idle);
        assert!(state.active_target.is_none());
        assert_eq!(state.base_gravity_scale, 2.0);
    }

    #[test]
    fn reset_restores_spawn_values() {
        let mut state = CharacterState::new(Vec2::ZERO, true, 1.0);
        state.position = Vec2::new(50.0, -20.0);
        state.velocity = Vec2::new(7.0, 7.0);
        state.facing_right = false;
        state.crouching = true;
        state.magnet_state = MagnetState::Pull;
        state.active_target = Some(TargetHandle(Entity::from_raw(1)));

        state.reset_to_spawn(Vec2::new(1.0, 1.0), true);

        assert_eq!(state.position, Vec2::new(1.0, 1.0));
        assert_eq!(state.velocity, Vec2::ZERO);
        assert!(state.facing_right);
        assert!(!state.crouching);
        assert_eq!(state.magnet_state, MagnetState::Idle);
        assert!(state.active_target.is_none());
        assert_eq!(state.base_gravity_scale, 1.0);
    }

    #[test]
    fn facing_helpers() {
        let mut state = CharacterState::new(Vec2::ZERO, false, 1.0);
        assert_eq!(state.facing_sign(), -1.0);
        assert_eq!(state.facing_direction(), Vec2::NEG_X);

        state.facing_right = true;
        assert_eq!(state.facing_direction(), Vec2::X);
    }
}
