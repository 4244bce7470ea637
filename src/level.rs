use std::time::Duration;

use bevy::prelude::*;
use bevy_persistent::Persistent;
use bevy_rapier2d::prelude::{
    Collider, ColliderMassProperties, CollisionGroups, ExternalForce, Friction, GravityScale, Group,
    LockedAxes, RigidBody, Sensor, Velocity,
};
use bevy_tweening::{lens::{SpriteColorLens, TransformScaleLens}, Animator, EaseFunction, Tween};
use mb_common::{
    components::{
        facing::Facing,
        level::{Despawnable, Hazard, LevelBounds, SpawnPoint, WallDefinition, WinZone},
        metal::MetalBlock,
        platform::MovingPlatform,
        player::{ArmPivot, Player, PlayerVisual},
    },
    events::LevelCommand,
};
use mb_movement::prelude::{CharacterController, ControllerOutput, SensorGrid};
use mb_util::constants::{
    GROUP_GROUND, GROUP_HAZARD, GROUP_METAL, GROUP_PLAYER, GROUP_WIN, PLAYER_BASE_GRAVITY_SCALE,
    PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, PLAYER_MASS, TILE_SIZE,
};

use crate::{in_game_ui::spawn_win_message, settings::Tuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Ground,
    Metal,
    Hazard,
    Win,
}

impl BlockKind {
    fn group(self) -> u32 {
        match self {
            BlockKind::Ground => GROUP_GROUND,
            BlockKind::Metal => GROUP_METAL,
            BlockKind::Hazard => GROUP_HAZARD,
            BlockKind::Win => GROUP_WIN,
        }
    }

    fn color(self) -> Color {
        match self {
            BlockKind::Ground => Color::rgb(0.36, 0.33, 0.29),
            BlockKind::Metal => Color::rgb(0.55, 0.62, 0.7),
            BlockKind::Hazard => Color::rgb(0.8, 0.2, 0.2),
            BlockKind::Win => Color::rgba(0.95, 0.85, 0.3, 0.6),
        }
    }
}

/// Axis-aligned block in tile units, `min` is the bottom-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub kind: BlockKind,
    pub min: Vec2,
    pub size: Vec2,
}

const fn block(kind: BlockKind, x: f32, y: f32, width: f32, height: f32) -> Block {
    Block {
        kind,
        min: Vec2::new(x, y),
        size: Vec2::new(width, height),
    }
}

impl Block {
    pub fn center(&self) -> Vec2 {
        (self.min + self.size / 2.0) * TILE_SIZE
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * TILE_SIZE / 2.0
    }
}

pub const LEVEL_SIZE: Vec2 = Vec2::new(64.0, 20.0);
pub const SPAWN_TILE: Vec2 = Vec2::new(2.0, 1.0);

#[rustfmt::skip]
pub const LEVEL: &[Block] = &[
    // Outer walls
    block(BlockKind::Ground, -1.0, 0.0, 1.0, 20.0),
    block(BlockKind::Ground, 64.0, 0.0, 1.0, 20.0),

    // Start, then a spike pit crossed by pulling on a hanging block
    block(BlockKind::Ground, 0.0, 0.0, 20.0, 1.0),
    block(BlockKind::Hazard, 20.0, 0.0, 6.0, 0.5),
    block(BlockKind::Metal, 22.0, 6.0, 2.0, 1.0),

    // Low tunnel, crouch through
    block(BlockKind::Ground, 26.0, 0.0, 14.0, 1.0),
    block(BlockKind::Ground, 30.0, 1.85, 6.0, 3.0),

    // Metal floor to push off towards the ledge
    block(BlockKind::Metal, 40.0, 0.0, 4.0, 1.0),
    block(BlockKind::Ground, 44.0, 5.0, 10.0, 1.0),
    block(BlockKind::Ground, 44.0, 0.0, 10.0, 1.0),

    // Second pit, ride the moving platform
    block(BlockKind::Hazard, 54.0, 0.0, 4.0, 0.5),

    // Goal
    block(BlockKind::Ground, 58.0, 0.0, 6.0, 1.0),
    block(BlockKind::Win, 62.0, 1.0, 1.0, 2.0),
];

/// Metal platform oscillating over the second pit: start tile, size, range and speed in pixels.
const PLATFORM: (Block, f32, f32) = (block(BlockKind::Metal, 53.0, 4.0, 2.0, 0.5), 72.0, 30.0);

pub fn spawn_point() -> Vec2 {
    SPAWN_TILE * TILE_SIZE + Vec2::new(0.0, PLAYER_HALF_HEIGHT + 1.0)
}

fn spawn_block(commands: &mut Commands, block: &Block) -> Entity {
    let center = block.center();
    let half_extents = block.half_extents();

    let mut entity = commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: block.kind.color(),
                custom_size: Some(half_extents * 2.0),
                ..default()
            },
            transform: Transform::from_xyz(center.x, center.y, 0.0),
            ..default()
        },
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y),
        CollisionGroups::new(Group::from_bits_truncate(block.kind.group()), Group::ALL),
        Despawnable {},
    ));

    match block.kind {
        BlockKind::Ground => {
            entity.insert(WallDefinition {});
        }
        BlockKind::Metal => {
            entity.insert(MetalBlock::new(half_extents));
        }
        BlockKind::Hazard => {
            entity.insert((Sensor, Hazard {}));
        }
        BlockKind::Win => {
            entity.insert((Sensor, WinZone {}));
        }
    }

    entity.id()
}

fn spawn_moving_platform(commands: &mut Commands) {
    let (block, range, speed) = PLATFORM;
    let center = block.center();
    let half_extents = block.half_extents();

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: block.kind.color(),
                custom_size: Some(half_extents * 2.0),
                ..default()
            },
            transform: Transform::from_xyz(center.x, center.y, 0.0),
            ..default()
        },
        RigidBody::KinematicPositionBased,
        Collider::cuboid(half_extents.x, half_extents.y),
        CollisionGroups::new(Group::from_bits_truncate(GROUP_METAL), Group::ALL),
        MetalBlock::new(half_extents),
        MovingPlatform {
            origin: center.extend(0.0),
            range,
            speed,
        },
        Despawnable {},
    ));
}

fn spawn_player(commands: &mut Commands, tuning: &Tuning, spawn: Vec2) {
    let config = tuning.controller_config();
    let sensors = SensorGrid::standard().unwrap_or_else(|error| panic!("bad sensor layout: {error}"));
    info!("sensor grid ready with {} sensors", sensors.specs().len());

    let controller = CharacterController::new(config, sensors, spawn, PLAYER_BASE_GRAVITY_SCALE)
        .unwrap_or_else(|error| panic!("failed to create the character controller: {error}"));

    let facing_x = if config.start_facing_right { 1.0 } else { -1.0 };

    let player = commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(spawn.x, spawn.y, 1.0)),
        RigidBody::Dynamic,
        Collider::cuboid(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),
        ColliderMassProperties::Mass(PLAYER_MASS),
        CollisionGroups::new(
            Group::from_bits_truncate(GROUP_PLAYER),
            Group::from_bits_truncate(GROUP_GROUND | GROUP_METAL | GROUP_HAZARD | GROUP_WIN),
        ),
        LockedAxes::ROTATION_LOCKED,
        Friction::coefficient(0.0),
        Velocity::default(),
        ExternalForce::default(),
        GravityScale(PLAYER_BASE_GRAVITY_SCALE),
        controller,
        ControllerOutput::default(),
        Player {},
        Despawnable {},
    )).id();

    let visual = commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT) * 2.0),
                ..default()
            },
            transform: Transform::from_scale(Vec3::new(facing_x, 1.0, 1.0)),
            ..default()
        },
        PlayerVisual {},
        Facing::new(config.start_facing_right),
        Animator::new(Tween::new(
            EaseFunction::QuadraticOut,
            Duration::from_secs_f32(0.0),
            TransformScaleLens {
                start: Vec3::new(facing_x, 1.0, 1.0),
                end: Vec3::new(facing_x, 1.0, 1.0),
            },
        )),
        Animator::new(Tween::new(
            EaseFunction::QuadraticOut,
            Duration::from_secs_f32(0.0),
            SpriteColorLens {
                start: Color::WHITE,
                end: Color::WHITE,
            },
        )),
    )).id();

    let pivot = config.arm_pivot();
    let arm = commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(pivot.x, pivot.y, 1.0)),
        ArmPivot {},
    )).with_children(|arm| {
        arm.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::GRAY,
                custom_size: Some(Vec2::new(8.0, 3.0)),
                ..default()
            },
            transform: Transform::from_xyz(4.0, 0.0, 0.0),
            ..default()
        });
    }).id();

    commands.entity(visual).add_child(arm);
    commands.entity(player).add_child(visual);
}

pub fn build_level(commands: &mut Commands, tuning: &Tuning, level_bounds: &mut LevelBounds) {
    level_bounds.size = LEVEL_SIZE * TILE_SIZE;

    for block in LEVEL {
        spawn_block(commands, block);
    }
    spawn_moving_platform(commands);

    let spawn = spawn_point();
    commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(spawn.x, spawn.y, 0.0)),
        SpawnPoint {},
        Despawnable {},
    ));

    spawn_player(commands, tuning, spawn);
    spawn_win_message(commands);
}

pub fn setup_level(
    mut commands: Commands,
    tuning: Res<Persistent<Tuning>>,
    mut level_bounds: ResMut<LevelBounds>,
) {
    build_level(&mut commands, &tuning, &mut level_bounds);
    info!("level built");
}

pub fn handle_level_commands(
    mut ev_level: EventReader<LevelCommand>,
    q_despawnable: Query<Entity, With<Despawnable>>,
    mut commands: Commands,
    tuning: Res<Persistent<Tuning>>,
    mut level_bounds: ResMut<LevelBounds>,
) {
    let reload = ev_level
        .iter()
        .filter(|command| matches!(command, LevelCommand::Reload))
        .count()
        > 0;
    if !reload {
        return;
    }

    info!("reloading level");
    for entity in q_despawnable.iter() {
        commands.entity(entity).despawn_recursive();
    }

    build_level(&mut commands, &tuning, &mut level_bounds);
}
