//! Controller tuning.
//!
//! All values are expressed for a body of the configured mass in world
//! units (pixels) and seconds. Defaults live in `mb_util::constants`.

use bevy::prelude::Vec2;
use mb_util::constants::{
    ARM_PIVOT_OFFSET_X, ARM_PIVOT_OFFSET_Y, FALL_MULTIPLIER, JUMP_RELEASE_DAMPING,
    MAGNET_FORCE, MAGNET_PUSH_FORCE, MAGNET_RANGE, PLAYER_CROUCH_SPEED, PLAYER_JUMP_FORCE,
    PLAYER_MAX_SPEED, PLAYER_NEGATIVE_ACCELERATION, PLAYER_POSITIVE_ACCELERATION,
    PLAYER_PUSH_ACCELERATION,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Fastest horizontal speed reachable from input alone.
    pub max_speed: f32,

    /// Fraction of the horizontal input kept while crouching (0.0-1.0).
    pub crouch_speed: f32,

    /// Whether horizontal input steers the character while airborne.
    pub air_control: bool,

    /// Rate (1/s) used when the velocity error points the way the character faces.
    pub positive_acceleration: f32,

    /// Rate (1/s) used when the velocity error points behind the character.
    pub negative_acceleration: f32,

    /// Rate (1/s) used while push is held, if set.
    pub push_acceleration: Option<f32>,

    /// Upward force applied for the single tick a jump fires.
    pub jump_force: f32,

    /// Downward force applied each tick while rising with jump released.
    pub jump_release_damping: f32,

    /// Gravity multiplier while falling.
    pub fall_multiplier: f32,

    /// Continuous pull force towards the locked magnet.
    pub magnet_force: f32,

    /// Force of a single push, applied for one tick.
    pub push_force: f32,

    /// Radius of the magnet detection circle.
    pub magnet_range: f32,

    pub arm_pivot_x: f32,
    pub arm_pivot_y: f32,

    pub start_facing_right: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_speed: PLAYER_MAX_SPEED,
            crouch_speed: PLAYER_CROUCH_SPEED,
            air_control: true,
            positive_acceleration: PLAYER_POSITIVE_ACCELERATION,
            negative_acceleration: PLAYER_NEGATIVE_ACCELERATION,
            push_acceleration: Some(PLAYER_PUSH_ACCELERATION),
            jump_force: PLAYER_JUMP_FORCE,
            jump_release_damping: JUMP_RELEASE_DAMPING,
            fall_multiplier: FALL_MULTIPLIER,
            magnet_force: MAGNET_FORCE,
            push_force: MAGNET_PUSH_FORCE,
            magnet_range: MAGNET_RANGE,
            arm_pivot_x: ARM_PIVOT_OFFSET_X,
            arm_pivot_y: ARM_PIVOT_OFFSET_Y,
            start_facing_right: true,
        }
    }
}

impl ControllerConfig {
    /// Offset of the aim source from the body center while facing right.
    pub fn arm_pivot(&self) -> Vec2 {
        Vec2::new(self.arm_pivot_x, self.arm_pivot_y)
    }

    /// Reject values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_speed", self.max_speed),
            ("positive_acceleration", self.positive_acceleration),
            ("negative_acceleration", self.negative_acceleration),
            ("push_acceleration", self.push_acceleration.unwrap_or(0.0)),
            ("jump_force", self.jump_force),
            ("jump_release_damping", self.jump_release_damping),
            ("magnet_force", self.magnet_force),
            ("push_force", self.push_force),
        ];

        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.crouch_speed) {
            return Err(ConfigError::InvalidTuning { field: "crouch_speed", value: self.crouch_speed });
        }

        if !(self.fall_multiplier.is_finite() && self.fall_multiplier > 0.0) {
            return Err(ConfigError::InvalidTuning { field: "fall_multiplier", value: self.fall_multiplier });
        }

        if !(self.magnet_range.is_finite() && self.magnet_range > 0.0) {
            return Err(ConfigError::InvalidTuning { field: "magnet_range", value: self.magnet_range });
        }

        if !(self.arm_pivot_x.is_finite() && self.arm_pivot_y.is_finite()) {
            return Err(ConfigError::InvalidTuning { field: "arm_pivot", value: f32::NAN });
        }

        Ok(())
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_crouch_speed(mut self, crouch_speed: f32) -> Self {
        self.crouch_speed = crouch_speed;
        self
    }

    pub fn with_air_control(mut self, enabled: bool) -> Self {
        self.air_control = enabled;
        self
    }

    /// Builder: set the same-side and reverse acceleration rates.
    pub fn with_acceleration(mut self, positive: f32, negative: f32) -> Self {
        self.positive_acceleration = positive;
        self.negative_acceleration = negative;
        self
    }

    pub fn with_push_acceleration(mut self, rate: Option<f32>) -> Self {
        self.push_acceleration = rate;
        self
    }

    /// Builder: set jump force and early-release damping.
    pub fn with_jump(mut self, force: f32, release_damping: f32) -> Self {
        self.jump_force = force;
        self.jump_release_damping = release_damping;
        self
    }

    pub fn with_fall_multiplier(mut self, multiplier: f32) -> Self {
        self.fall_multiplier = multiplier;
        self
    }

    /// Builder: set pull force, push force and detection range.
    pub fn with_magnetism(mut self, pull_force: f32, push_force: f32, range: f32) -> Self {
        self.magnet_force = pull_force;
        self.push_force = push_force;
        self.magnet_range = range;
        self
    }

    pub fn with_arm_pivot(mut self, pivot: Vec2) -> Self {
        self.arm_pivot_x = pivot.x;
        self.arm_pivot_y = pivot.y;
        self
    }

    pub fn facing_left(mut self) -> Self {
        self.start_facing_right = false;
        self
    }
}
