use bevy::prelude::{App, FixedTime, Plugin, ResMut, Startup, Vec2};
use bevy_rapier2d::{
    prelude::{NoUserData, RapierConfiguration, RapierPhysicsPlugin, TimestepMode},
    render::RapierDebugRenderPlugin,
};
use mb_util::constants::{GRAVITY, PHYSICS_TICK_HZ, PIXELS_PER_METER};

#[derive(Debug, Default)]
pub struct PhysicsPlugin {
    pub debug_render: bool,
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(FixedTime::new_from_secs(1.0 / PHYSICS_TICK_HZ))
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(PIXELS_PER_METER).in_fixed_schedule())
            .add_systems(Startup, configure_rapier);

        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

// Rapier steps inside FixedUpdate, so each step covers exactly one tick.
fn configure_rapier(mut config: ResMut<RapierConfiguration>) {
    config.gravity = Vec2::new(0.0, GRAVITY);
    config.timestep_mode = TimestepMode::Fixed {
        dt: 1.0 / PHYSICS_TICK_HZ,
        substeps: 1,
    };
}
