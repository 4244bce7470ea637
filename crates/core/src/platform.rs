use bevy::prelude::{App, Plugin, Query, Res, Time, Transform, Update};
use mb_common::components::platform::MovingPlatform;

pub fn move_platforms(
    mut q_platforms: Query<(&mut Transform, &MovingPlatform)>,
    time: Res<Time>,
) {
    let elapsed = time.elapsed_seconds();

    for (mut transform, platform) in q_platforms.iter_mut() {
        transform.translation.x = platform.origin.x + platform.offset(elapsed);
        transform.translation.y = platform.origin.y;
    }
}

#[derive(Debug, Default)]
pub struct PlatformPlugin {}

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, move_platforms);
    }
}
