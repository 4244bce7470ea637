//! Push / pull state machine and magnet force shaping.

use bevy::prelude::{debug, warn, Vec2};

use crate::config::ControllerConfig;
use crate::intent::Intent;
use crate::math::normalize_or;
use crate::output::ControllerEvent;
use crate::physics::{Aabb, MagnetTarget, PhysicsWorld};
use crate::state::{CharacterState, MagnetState};

/// Magnet forces for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MagnetStep {
    pub force: Vec2,
    pub pushed: bool,
    /// Pulling while touching metal; the body hangs in place.
    pub docked: bool,
}

/// Nearest target to `origin`. Ties keep the first one encountered.
pub fn select_target(targets: &[MagnetTarget], origin: Vec2) -> Option<MagnetTarget> {
    let mut nearest: Option<(f32, MagnetTarget)> = None;

    for target in targets {
        let distance = target.position.distance_squared(origin);
        match nearest {
            Some((best, _)) if distance >= best => {}
            _ => nearest = Some((distance, *target)),
        }
    }

    nearest.map(|(_, target)| target)
}

/// Advance the magnet state machine.
///
/// `nearest` is the closest magnet within `range` this tick. An engaged target
/// that leaves `range` or no longer resolves drops the state to Idle. Returns
/// the resolved active target, if any, after transitions.
pub fn transition<W: PhysicsWorld + ?Sized>(
    world: &W,
    intent: &Intent,
    nearest: Option<MagnetTarget>,
    range: f32,
    state: &mut CharacterState,
    events: &mut Vec<ControllerEvent>,
) -> Option<MagnetTarget> {
    if !intent.push_held && !intent.pull_held {
        release(state, events);
        return None;
    }

    if state.magnet_state != MagnetState::Idle {
        match state.active_target.and_then(|handle| world.magnet(handle)) {
            Some(target) if target.bounds.intersects_circle(state.position, range) => return Some(target),
            Some(target) => {
                debug!("magnet target {:?} left range", target.handle);
                release(state, events);
            }
            None => {
                warn!("magnet target {:?} is gone, releasing", state.active_target);
                release(state, events);
            }
        }
        return None;
    }

    let Some(target) = nearest else {
        return None;
    };

    let next = if intent.push_held {
        MagnetState::Push
    } else {
        MagnetState::Pull
    };

    debug!("magnet {:?} -> {:?} on {:?}", state.magnet_state, next, target.handle);
    state.magnet_state = next;
    state.active_target = Some(target.handle);

    if next == MagnetState::Pull {
        events.push(ControllerEvent::PullStarted);
    }

    Some(target)
}

/// Return to Idle, reporting the end of a pull.
pub fn release(state: &mut CharacterState, events: &mut Vec<ControllerEvent>) {
    if state.magnet_state == MagnetState::Idle {
        return;
    }

    debug!("magnet {:?} -> Idle", state.magnet_state);
    if state.magnet_state == MagnetState::Pull {
        events.push(ControllerEvent::PullEnded);
    }
    state.release_magnet();
}

/// Axis sign of `value` relative to `[min, max]`: -1 below, 0 inside, 1 above.
fn side(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        -1.0
    } else if value > max {
        1.0
    } else {
        0.0
    }
}

/// Direction pushing the character away from `bounds`.
pub fn push_direction(position: Vec2, bounds: &Aabb, fallback: Vec2) -> Vec2 {
    let raw = Vec2::new(
        side(position.x, bounds.min.x, bounds.max.x),
        side(position.y, bounds.min.y, bounds.max.y),
    );
    normalize_or(raw, fallback)
}

/// Push impulse, doubled when it works against the current velocity.
pub fn push_force(config: &ControllerConfig, state: &CharacterState, target: &MagnetTarget) -> Vec2 {
    let direction = push_direction(state.position, &target.bounds, state.facing_direction());
    let magnitude = if direction.dot(state.velocity) < 0.0 {
        config.push_force * 2.0
    } else {
        config.push_force
    };
    direction * magnitude
}

pub fn pull_force(config: &ControllerConfig, state: &CharacterState, target: &MagnetTarget) -> Vec2 {
    normalize_or(target.position - state.position, state.facing_direction()) * config.magnet_force
}

/// Forces contributed by the current magnet state.
///
/// A push clears `state.facts.grounded`.
pub fn apply(
    config: &ControllerConfig,
    intent: &Intent,
    target: Option<&MagnetTarget>,
    state: &mut CharacterState,
    events: &mut Vec<ControllerEvent>,
) -> MagnetStep {
    let Some(target) = target else {
        return MagnetStep::default();
    };

    match state.magnet_state {
        MagnetState::Idle => MagnetStep::default(),
        MagnetState::Push => {
            if !intent.push_edge {
                return MagnetStep::default();
            }
            state.facts.grounded = false;
            events.push(ControllerEvent::PushFired);
            MagnetStep {
                force: push_force(config, state, target),
                pushed: true,
                docked: false,
            }
        }
        MagnetState::Pull => {
            if state.facts.touching_metal() {
                MagnetStep { docked: true, ..Default::default() }
            } else {
                MagnetStep {
                    force: pull_force(config, state, target),
                    ..Default::default()
                }
            }
        }
    }
}
