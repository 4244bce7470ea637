use bevy::{prelude::{default, App, ImagePlugin, IntoSystemConfigs, PluginGroup, Startup, Update}, window::{PresentMode, Window, WindowPlugin, WindowResolution}, DefaultPlugins};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use in_game_ui::show_win_message;
use input::latch_player_input;
use level::{handle_level_commands, setup_level};
use mb_common::CommonPlugin;
use mb_core::CorePlugin;
use mb_movement::MovementPlugin;
use mb_util::constants::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, WINDOW_TITLE};
use presentation::{flip_player_visual, rotate_arm, tint_on_controller_events};
use settings::{load_tuning, reload_tuning};

pub mod in_game_ui;
pub mod input;
pub mod level;
pub mod presentation;
pub mod settings;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
              title: WINDOW_TITLE.to_string(),
              resizable: true,
              resolution: WindowResolution::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
              present_mode: PresentMode::AutoVsync,
              ..default()
            }),
            ..default()
        }).set(ImagePlugin::default_nearest()));

    // Needs the log plugin from DefaultPlugins
    let tuning = load_tuning();
    let debug_physics = tuning.debug_physics;

    app
        .insert_resource(tuning)
        .add_plugins(FramepacePlugin)
        .add_plugins(CommonPlugin {})
        .add_plugins(CorePlugin { debug_physics })
        .add_plugins(MovementPlugin {})
        .insert_resource(FramepaceSettings {
            limiter: Limiter::from_framerate(60.0)
        });

    app.add_systems(Startup, setup_level);

    app.add_systems(Update, (
        latch_player_input,
        reload_tuning,
        handle_level_commands,
        flip_player_visual,
        rotate_arm,
        tint_on_controller_events,
        show_win_message,
    ).chain());

    app.run();
}
