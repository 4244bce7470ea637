use std::time::Duration;

use bevy::prelude::{Children, Color, EventReader, Quat, Query, Sprite, Transform, Vec3, With, Without};
use bevy_tweening::{lens::{SpriteColorLens, TransformScaleLens}, Animator, EaseFunction, Tween};
use mb_common::components::{facing::Facing, player::{ArmPivot, Player, PlayerVisual}};
use mb_common::events::LevelCommand;
use mb_movement::prelude::{ControllerEvent, ControllerOutput, MagnetState};
use mb_util::constants::DEATH_TINT_TIME;

const FLIP_TIME: f32 = 0.2;
const CUE_TINT_TIME: f32 = 0.15;

const PUSH_COLOR: Color = Color::rgb(1.0, 0.55, 0.2);
const PULL_COLOR: Color = Color::rgb(0.3, 0.8, 1.0);
const DEATH_COLOR: Color = Color::rgb(1.0, 0.15, 0.15);

fn create_flip_tween(from_x: f32, to_x: f32, duration: f32) -> Tween<Transform> {
    Tween::new(
        EaseFunction::BounceOut,
        Duration::from_secs_f32(duration),
        TransformScaleLens {
            start: Vec3::new(from_x, 1.0, 1.0),
            end: Vec3::new(to_x, 1.0, 1.0),
        },
    )
}

fn create_tint_tween(color: Color, duration: f32) -> Tween<Sprite> {
    Tween::new(
        EaseFunction::QuadraticIn,
        Duration::from_secs_f32(duration),
        SpriteColorLens {
            start: color,
            end: Color::WHITE,
        },
    )
}

pub fn magnet_color(state: MagnetState) -> Color {
    match state {
        MagnetState::Idle => Color::GRAY,
        MagnetState::Push => PUSH_COLOR,
        MagnetState::Pull => PULL_COLOR,
    }
}

/// Strongest cue among this frame's events.
pub fn tint_for(events: impl IntoIterator<Item = ControllerEvent>) -> Option<(Color, f32)> {
    let mut tint = None;

    for event in events {
        match event {
            ControllerEvent::Died => return Some((DEATH_COLOR, DEATH_TINT_TIME)),
            ControllerEvent::PushFired => tint = Some((PUSH_COLOR, CUE_TINT_TIME)),
            ControllerEvent::PullStarted if tint.is_none() => tint = Some((PULL_COLOR, CUE_TINT_TIME)),
            _ => (),
        }
    }

    tint
}

/// Scale endpoints for the flip tween. A reset lands on the spawn
/// orientation without the bounce.
fn flip_scales(facing_right: bool, resetting: bool) -> (f32, f32) {
    let to_x = if facing_right { 1.0 } else { -1.0 };
    if resetting {
        (to_x, to_x)
    } else {
        (-to_x, to_x)
    }
}

pub fn flip_player_visual(
    mut ev_level: EventReader<LevelCommand>,
    q_player: Query<&ControllerOutput, With<Player>>,
    mut q_visual: Query<(&mut Facing, &mut Transform, &mut Animator<Transform>), With<PlayerVisual>>,
) {
    let resetting = ev_level
        .iter()
        .filter(|command| matches!(command, LevelCommand::ResetToSpawn(_)))
        .count()
        > 0;

    let Ok(output) = q_player.get_single() else {
        return;
    };

    for (mut facing, mut transform, mut animator) in q_visual.iter_mut() {
        facing.right.update_value(output.facing_right);

        if !facing.changed() && !resetting {
            continue;
        }

        let (from_x, to_x) = flip_scales(output.facing_right, resetting);
        if resetting {
            transform.scale = Vec3::new(to_x, 1.0, 1.0);
        }
        animator.set_tweenable(create_flip_tween(from_x, to_x, FLIP_TIME));
    }
}

pub fn rotate_arm(
    q_player: Query<&ControllerOutput, With<Player>>,
    mut q_arm: Query<(&mut Transform, &Children), With<ArmPivot>>,
    mut q_sprites: Query<&mut Sprite, (Without<PlayerVisual>, Without<ArmPivot>)>,
) {
    let Ok(output) = q_player.get_single() else {
        return;
    };

    for (mut transform, children) in q_arm.iter_mut() {
        transform.rotation = Quat::from_rotation_z(output.arm_rotation);

        for &child in children.iter() {
            if let Ok(mut sprite) = q_sprites.get_mut(child) {
                sprite.color = magnet_color(output.magnet_state);
            }
        }
    }
}

pub fn tint_on_controller_events(
    mut ev_controller: EventReader<ControllerEvent>,
    mut q_visual: Query<&mut Animator<Sprite>, With<PlayerVisual>>,
) {
    let Some((color, duration)) = tint_for(ev_controller.iter().copied()) else {
        return;
    };

    for mut animator in q_visual.iter_mut() {
        animator.set_tweenable(create_tint_tween(color, duration));
    }
}
