pub const WINDOW_TITLE: &str = "Magnet Boy";
pub const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 768.0;

pub const ASPECT_RATIO_X: f32 = 512.0 / 1.5;
pub const ASPECT_RATIO_Y: f32 = 364.0 / 1.5;

pub const PHYSICS_TICK_HZ: f32 = 60.0;
pub const PIXELS_PER_METER: f32 = 10.0;
pub const GRAVITY: f32 = -980.0;

pub const TILE_SIZE: f32 = 24.0;

// Player body, in pixels
pub const PLAYER_HALF_WIDTH: f32 = 6.0;
pub const PLAYER_HALF_HEIGHT: f32 = 9.0;
pub const PLAYER_MASS: f32 = 1.0;
pub const PLAYER_BASE_GRAVITY_SCALE: f32 = 1.0;

// Locomotion
pub const PLAYER_MAX_SPEED: f32 = 120.0;
pub const PLAYER_CROUCH_SPEED: f32 = 0.36;
pub const PLAYER_POSITIVE_ACCELERATION: f32 = 10.0;
pub const PLAYER_NEGATIVE_ACCELERATION: f32 = 20.0;
pub const PLAYER_PUSH_ACCELERATION: f32 = 30.0;

// Jumping, forces are applied for a single physics tick
pub const PLAYER_JUMP_FORCE: f32 = 18_000.0;
pub const JUMP_RELEASE_DAMPING: f32 = 900.0;
pub const FALL_MULTIPLIER: f32 = 2.0;

// Magnetism
pub const MAGNET_FORCE: f32 = 3_000.0;
pub const MAGNET_PUSH_FORCE: f32 = 24_000.0;
pub const MAGNET_RANGE: f32 = 96.0;
pub const ARM_PIVOT_OFFSET_X: f32 = 0.0;
pub const ARM_PIVOT_OFFSET_Y: f32 = 2.0;

// Sensors, offsets are local to the player center
pub const GROUND_CHECK_RADIUS: f32 = 3.0;
pub const CEILING_CHECK_RADIUS: f32 = 3.0;
pub const METAL_CHECK_RADIUS: f32 = 1.5;
pub const TRIGGER_CHECK_RADIUS: f32 = 2.0;
pub const SENSOR_VERTICAL_OFFSET: f32 = PLAYER_HALF_HEIGHT;
pub const METAL_SENSOR_REACH: f32 = 1.0;

// Collision groups, one bit per surface class
pub const GROUP_GROUND: u32 = 1 << 0;
pub const GROUP_METAL: u32 = 1 << 1;
pub const GROUP_HAZARD: u32 = 1 << 2;
pub const GROUP_WIN: u32 = 1 << 3;
pub const GROUP_PLAYER: u32 = 1 << 4;

pub const PLAYER_CAMERA_MARGIN_X: usize = 10; // 10% of the width from the center
pub const PLAYER_CAMERA_MARGIN_Y: usize = 10; // 10% of the height from the center

pub const DEATH_TINT_TIME: f32 = 0.2;
