use crate::config::ControllerConfig;
use crate::state::{CharacterState, MagnetState};

/// Result of one horizontal integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HorizontalStep {
    /// Force on the X axis.
    pub force: f32,
    /// Input magnitude reported to the run animation.
    pub speed: f32,
    pub flipped: bool,
}

/// Crouch stays forced on while something is overhead.
pub fn resolve_crouch(crouch_intent: bool, was_crouching: bool, on_ceiling: bool) -> bool {
    crouch_intent || (was_crouching && on_ceiling)
}

/// Whether horizontal input steers the body this tick.
pub fn has_control(config: &ControllerConfig, state: &CharacterState) -> bool {
    (state.facts.grounded || config.air_control) && state.magnet_state != MagnetState::Pull
}

/// Pick the rate used to close the gap between target and current speed.
///
/// `delta` is compared against the facing the character had before this
/// tick's flip.
pub fn acceleration_rate(config: &ControllerConfig, delta: f32, facing_sign: f32, push_held: bool) -> f32 {
    if push_held {
        if let Some(rate) = config.push_acceleration {
            return rate;
        }
    }

    if delta.signum() == facing_sign {
        config.positive_acceleration
    } else {
        config.negative_acceleration
    }
}

/// Steer the body towards `max_speed * horizontal`.
///
/// Updates `state.crouching` and `state.facing_right`. The returned force is
/// already scaled by `mass`.
pub fn integrate(
    config: &ControllerConfig,
    state: &mut CharacterState,
    horizontal: f32,
    crouch_intent: bool,
    push_held: bool,
    mass: f32,
) -> HorizontalStep {
    state.crouching = resolve_crouch(crouch_intent, state.crouching, state.facts.on_ceiling);

    if !has_control(config, state) {
        return HorizontalStep::default();
    }

    let horizontal = if state.crouching {
        horizontal * config.crouch_speed
    } else {
        horizontal
    };

    let target_speed = config.max_speed * horizontal;
    let delta = target_speed - state.velocity.x;
    let rate = acceleration_rate(config, delta, state.facing_sign(), push_held);

    let flipped = (horizontal > 0.0 && !state.facing_right) || (horizontal < 0.0 && state.facing_right);
    if flipped {
        state.facing_right = !state.facing_right;
    }

    HorizontalStep {
        force: delta * rate * mass,
        speed: horizontal.abs(),
        flipped,
    }
}
