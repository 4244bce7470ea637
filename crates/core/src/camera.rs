use bevy::{prelude::*, window::PrimaryWindow};
use bevy_parallax::*;
use mb_common::{components::{level::LevelBounds, player::Player}, events::LevelCommand};
use mb_util::constants::{ASPECT_RATIO_X, ASPECT_RATIO_Y, PLAYER_CAMERA_MARGIN_X, PLAYER_CAMERA_MARGIN_Y};

fn spawn_camera(
    mut commands: Commands,
    mut create_parallax: EventWriter<CreateParallaxEvent>,
) {
    let camera = commands.spawn((
        Camera2dBundle::default(),
        ParallaxCameraComponent::default(),
    )).id();

    create_parallax.send(CreateParallaxEvent {
        layers_data: vec![
            LayerData {
                speed: LayerSpeed::Bidirectional(0.9, 0.95),
                repeat: LayerRepeat::horizontally(RepeatStrategy::Same),
                path: "sprites/background_far.png".to_string(),
                tile_size: Vec2::new(622.0, 317.0),
                cols: 1,
                rows: 1,
                scale: 1.2,
                z: -2.0,
                ..default()
            },
            LayerData {
                speed: LayerSpeed::Bidirectional(0.6, 0.8),
                repeat: LayerRepeat::horizontally(RepeatStrategy::Same),
                path: "sprites/background_near.png".to_string(),
                tile_size: Vec2::new(622.0, 317.0),
                cols: 1,
                rows: 1,
                scale: 1.2,
                z: -1.0,
                ..default()
            },
        ],
        camera,
    });
}

fn half_view() -> Vec2 {
    Vec2::new(ASPECT_RATIO_X, ASPECT_RATIO_Y) / 2.0
}

fn dead_zone() -> Vec2 {
    Vec2::new(
        ASPECT_RATIO_X * ((PLAYER_CAMERA_MARGIN_X as f32 / 2.0) / 100.0),
        ASPECT_RATIO_Y * ((PLAYER_CAMERA_MARGIN_Y as f32 / 2.0) / 100.0),
    )
}

/// Keep the view inside the level; a level smaller than the view is centered.
pub fn clamp_to_level(center: Vec2, half_view: Vec2, bounds: &LevelBounds) -> Vec2 {
    let clamp_axis = |value: f32, half: f32, size: f32| {
        if size <= half * 2.0 {
            size / 2.0
        } else {
            value.clamp(half, size - half)
        }
    };

    Vec2::new(
        clamp_axis(center.x, half_view.x, bounds.size.x),
        clamp_axis(center.y, half_view.y, bounds.size.y),
    )
}

/// Where the camera should be once the player has left the dead zone.
pub fn follow_target(camera: Vec2, player: Vec2, margin: Vec2, half_view: Vec2, bounds: &LevelBounds) -> Vec2 {
    let mut target = camera;

    if player.x < camera.x - margin.x {
        target.x = player.x + margin.x;
    }
    if player.x > camera.x + margin.x {
        target.x = player.x - margin.x;
    }
    if player.y < camera.y - margin.y {
        target.y = player.y + margin.y;
    }
    if player.y > camera.y + margin.y {
        target.y = player.y - margin.y;
    }

    clamp_to_level(target, half_view, bounds)
}

/// Move the camera with the player, or snap it straight to the spawn point
/// after a reset.
pub fn follow_player_with_camera(
    mut ev_level: EventReader<LevelCommand>,
    q_player: Query<&Transform, (With<Player>, Without<Camera>)>,
    q_camera: Query<(&Transform, Entity), With<ParallaxCameraComponent>>,
    level_bounds: Res<LevelBounds>,
    mut move_event_writer: EventWriter<ParallaxMoveEvent>,
) {
    let spawn = ev_level
        .iter()
        .filter_map(|command| match command {
            LevelCommand::ResetToSpawn(spawn) => Some(*spawn),
            LevelCommand::Reload => None,
        })
        .last();

    let Ok((camera, entity)) = q_camera.get_single() else {
        return;
    };
    let current = camera.translation.truncate();

    let target = match (spawn, q_player.get_single()) {
        (Some(spawn), _) => clamp_to_level(spawn, half_view(), &level_bounds),
        (None, Ok(player)) => follow_target(current, player.translation.truncate(), dead_zone(), half_view(), &level_bounds),
        (None, Err(_)) => return,
    };

    if target != current {
        move_event_writer.send(ParallaxMoveEvent {
            camera_move_speed: target - current,
            camera: entity,
        });
    }
}

pub fn auto_scale_sys(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut OrthographicProjection, With<Camera>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    for mut projection in query.iter_mut() {
        let scale = (ASPECT_RATIO_Y / window.height()).max(ASPECT_RATIO_X / window.width());
        projection.scale = scale;
    }
}

#[derive(Debug, Default)]
pub struct CameraPlugin {}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(ParallaxPlugin {})
            .init_resource::<LevelBounds>()
            .insert_resource(ClearColor(Color::rgb(0.12, 0.13, 0.17)))
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, (auto_scale_sys, follow_player_with_camera).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> LevelBounds {
        LevelBounds { size: Vec2::new(1000.0, 500.0) }
    }

    #[test]
    fn stays_still_inside_dead_zone() {
        let camera = Vec2::new(300.0, 200.0);
        let target = follow_target(camera, Vec2::new(305.0, 195.0), Vec2::splat(10.0), Vec2::new(100.0, 80.0), &bounds());
        assert_eq!(target, camera);
    }

    #[test]
    fn follows_past_the_margin() {
        let camera = Vec2::new(300.0, 200.0);
        let target = follow_target(camera, Vec2::new(330.0, 170.0), Vec2::splat(10.0), Vec2::new(100.0, 80.0), &bounds());
        assert_eq!(target, Vec2::new(320.0, 180.0));
    }

    #[test]
    fn clamps_to_level_edges() {
        let half_view = Vec2::new(100.0, 80.0);
        assert_eq!(clamp_to_level(Vec2::new(-50.0, 900.0), half_view, &bounds()), Vec2::new(100.0, 420.0));
    }

    #[test]
    fn small_level_is_centered() {
        let small = LevelBounds { size: Vec2::new(120.0, 100.0) };
        assert_eq!(clamp_to_level(Vec2::new(500.0, 0.0), Vec2::new(100.0, 80.0), &small), Vec2::new(60.0, 50.0));
    }
}
