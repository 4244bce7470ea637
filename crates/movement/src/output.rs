//! What the controller reports each physics tick.
//!
//! The presentation layer reads these values; nothing flows back.

use bevy::prelude::{Component, Event, Vec2};

use crate::state::MagnetState;

/// Discrete cue emitted by the controller.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    Jumped,
    PushFired,
    PullStarted,
    PullEnded,
    Died,
    Won,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ControllerOutput {
    /// Absolute horizontal input after crouch scaling, for the run animation.
    pub speed: f32,
    pub grounded: bool,
    pub crouching: bool,
    pub facing_right: bool,
    /// Unit aim vector in world space.
    pub aim: Vec2,
    /// Rotation (radians) for the arm, relative to the facing direction.
    pub arm_rotation: f32,
    pub magnet_state: MagnetState,
    /// Summed force handed to the physics world this tick.
    pub applied_force: Vec2,
    pub events: Vec<ControllerEvent>,
}

impl Default for ControllerOutput {
    fn default() -> Self {
        Self {
            speed: 0.0,
            grounded: false,
            crouching: false,
            facing_right: true,
            aim: Vec2::X,
            arm_rotation: 0.0,
            magnet_state: MagnetState::Idle,
            applied_force: Vec2::ZERO,
            events: Vec::new(),
        }
    }
}

impl ControllerOutput {
    pub fn has(&self, event: ControllerEvent) -> bool {
        self.events.contains(&event)
    }
}
