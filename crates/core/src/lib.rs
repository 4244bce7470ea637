use bevy::{prelude::{Plugin, App, KeyCode}, input::common_conditions::input_toggle_active};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_tweening::TweeningPlugin;
use camera::CameraPlugin;
use platform::PlatformPlugin;

use self::physics::PhysicsPlugin;

pub mod camera;
pub mod physics;
pub mod platform;

#[derive(Debug, Default)]
pub struct CorePlugin {
    /// Draw Rapier colliders.
    pub debug_physics: bool,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(
                WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::Grave)),
            )
            .add_plugins(TweeningPlugin)
            .add_plugins(CameraPlugin {})
            .add_plugins(PlatformPlugin {})
            .add_plugins(PhysicsPlugin { debug_render: self.debug_physics });
    }
}
