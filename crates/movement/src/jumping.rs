use crate::config::ControllerConfig;
use crate::intent::Intent;
use crate::state::CharacterState;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpStep {
    /// Force on the Y axis.
    pub force: f32,
    pub jumped: bool,
    pub gravity_scale: f32,
}

/// Gravity is heavier on the way down.
pub fn gravity_scale(config: &ControllerConfig, base: f32, velocity_y: f32) -> f32 {
    if velocity_y <= 0.0 {
        base * config.fall_multiplier
    } else {
        base
    }
}

/// Jump impulse, early-release damping and gravity asymmetry.
///
/// A jump clears `state.facts.grounded` for the rest of the tick.
pub fn apply(config: &ControllerConfig, intent: &Intent, state: &mut CharacterState) -> JumpStep {
    let mut step = JumpStep {
        gravity_scale: gravity_scale(config, state.base_gravity_scale, state.velocity.y),
        ..Default::default()
    };

    if state.facts.grounded && intent.jump_edge {
        state.facts.grounded = false;
        step.force += config.jump_force;
        step.jumped = true;
    }

    if !state.facts.grounded && !intent.jump_held && !intent.push_held && state.velocity.y > 0.0 {
        step.force -= config.jump_release_damping;
    }

    step
}
