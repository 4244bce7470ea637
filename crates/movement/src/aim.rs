use bevy::prelude::Vec2;

use crate::math::{normalize_or, AXIS_DEADZONE};
use crate::physics::MagnetTarget;
use crate::state::CharacterState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub direction: Vec2,
    /// Radians, measured from the facing direction.
    pub arm_rotation: f32,
}

/// World position the arm aims from, mirrored with the facing.
pub fn aim_source(state: &CharacterState, arm_pivot: Vec2) -> Vec2 {
    state.position + Vec2::new(arm_pivot.x * state.facing_sign(), arm_pivot.y)
}

/// Pick the aim vector: engaged target, then nearest target in range, then
/// input with a real vertical part, then facing.
pub fn resolve(
    state: &CharacterState,
    arm_pivot: Vec2,
    active: Option<&MagnetTarget>,
    nearest: Option<&MagnetTarget>,
    horizontal: f32,
    vertical: f32,
) -> Aim {
    let facing = state.facing_direction();
    let source = aim_source(state, arm_pivot);

    let raw = if let Some(target) = active.filter(|_| state.is_magnet_engaged()) {
        target.position - source
    } else if let Some(target) = nearest {
        target.position - source
    } else if vertical.abs() > AXIS_DEADZONE {
        Vec2::new(horizontal, vertical)
    } else {
        facing
    };

    let direction = normalize_or(raw, facing);
    Aim {
        direction,
        arm_rotation: direction.y.atan2(direction.x * state.facing_sign()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Aabb, TargetHandle};
    use crate::state::MagnetState;
    use bevy::prelude::Entity;
    use std::f32::consts::FRAC_PI_2;

    fn target(id: u32, position: Vec2) -> MagnetTarget {
        MagnetTarget {
            handle: TargetHandle(Entity::from_raw(id)),
            position,
            bounds: Aabb::from_center(position, Vec2::ONE),
        }
    }

    #[test]
    fn falls_back_to_facing() {
        let state = CharacterState::new(Vec2::ZERO, false, 1.0);
        let aim = resolve(&state, Vec2::ZERO, None, None, 1.0, 0.0);

        assert_eq!(aim.direction, Vec2::NEG_X);
        assert_eq!(aim.arm_rotation, 0.0);
    }

    #[test]
    fn vertical_input_aims() {
        let state = CharacterState::new(Vec2::ZERO, true, 1.0);
        let aim = resolve(&state, Vec2::ZERO, None, None, 0.0, 1.0);

        assert_eq!(aim.direction, Vec2::Y);
        assert!((aim.arm_rotation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn nearest_target_beats_input() {
        let state = CharacterState::new(Vec2::ZERO, true, 1.0);
        let nearest = target(1, Vec2::new(5.0, 0.0));
        let aim = resolve(&state, Vec2::ZERO, None, Some(&nearest), 0.0, -1.0);

        assert_eq!(aim.direction, Vec2::X);
    }

    #[test]
    fn engaged_target_beats_nearest() {
        let mut state = CharacterState::new(Vec2::ZERO, true, 1.0);
        let active = target(1, Vec2::new(0.0, 8.0));
        let nearest = target(2, Vec2::new(2.0, 0.0));
        state.magnet_state = MagnetState::Pull;
        state.active_target = Some(active.handle);

        let aim = resolve(&state, Vec2::ZERO, Some(&active), Some(&nearest), 0.0, 0.0);
        assert_eq!(aim.direction, Vec2::Y);
    }

    #[test]
    fn pivot_mirrors_with_facing() {
        let mut state = CharacterState::new(Vec2::new(10.0, 0.0), true, 1.0);
        assert_eq!(aim_source(&state, Vec2::new(2.0, 3.0)), Vec2::new(12.0, 3.0));

        state.facing_right = false;
        assert_eq!(aim_source(&state, Vec2::new(2.0, 3.0)), Vec2::new(8.0, 3.0));
    }

    #[test]
    fn rotation_is_relative_to_facing() {
        let state = CharacterState::new(Vec2::ZERO, false, 1.0);
        let aim = resolve(&state, Vec2::ZERO, None, None, -1.0, 1.0);

        // Up and forward while facing left reads as 45 degrees up
        assert!((aim.arm_rotation - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
