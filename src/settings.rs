use std::path::{Path, PathBuf};

use bevy::prelude::{info, warn, Input, KeyCode, Query, Res, ResMut, Resource, With};
use bevy_persistent::prelude::*;
use mb_common::components::player::Player;
use mb_movement::prelude::{CharacterController, ControllerConfig};
use serde::{Deserialize, Serialize};

/// Player-editable tuning, stored as JSON next to the other config files.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Tuning {
    pub controller: ControllerConfig,
    pub debug_physics: bool,
}

impl Tuning {
    /// Controller tuning, or the defaults when the stored values are unusable.
    pub fn controller_config(&self) -> ControllerConfig {
        match self.controller.validate() {
            Ok(()) => self.controller,
            Err(error) => {
                warn!("ignoring stored controller tuning: {error}");
                ControllerConfig::default()
            }
        }
    }
}

pub fn tuning_path() -> PathBuf {
    dirs::config_dir()
        .map(|native| native.join("magnet-boy"))
        .unwrap_or(Path::new("local").join("configuration"))
        .join("tuning.json")
}

fn try_load_tuning() -> Option<Persistent<Tuning>> {
    let path = tuning_path();
    info!("loading tuning from {}", path.display());

    Persistent::<Tuning>::builder()
        .name("tuning")
        .format(StorageFormat::Json)
        .path(path.clone())
        .default(Tuning::default())
        .build()
        .map_err(|error| warn!("failed to load tuning from {}: {error:?}", path.display()))
        .ok()
}

/// Missing files are created with defaults; an unreadable one is fatal at startup.
pub fn load_tuning() -> Persistent<Tuning> {
    try_load_tuning().unwrap_or_else(|| panic!("failed to initialize tuning at {}", tuning_path().display()))
}

/// F5 re-reads the tuning file and hands it to every controller.
pub fn reload_tuning(
    keyboard_input: Res<Input<KeyCode>>,
    mut tuning: ResMut<Persistent<Tuning>>,
    mut q_player: Query<&mut CharacterController, With<Player>>,
) {
    if !keyboard_input.just_pressed(KeyCode::F5) {
        return;
    }

    let Some(reloaded) = try_load_tuning() else {
        return;
    };
    *tuning = reloaded;

    let config = tuning.controller_config();
    for mut controller in q_player.iter_mut() {
        if let Err(error) = controller.set_config(config) {
            warn!("tuning rejected: {error}");
        }
    }

    info!("tuning reloaded");
}
