use bevy::prelude::{Plugin, App};
use components::{player::Player, metal::MetalBlock, platform::MovingPlatform};
use events::LevelCommand;

pub mod components;
pub mod events;

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<LevelCommand>()
            .register_type::<MetalBlock>()
            .register_type::<MovingPlatform>()
            .register_type::<Player>();
    }
}
