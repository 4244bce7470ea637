use bevy::prelude::{Event, Vec2};

/// Requests the character controller makes of the level host.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum LevelCommand {
    /// Snap anything anchored to the player (camera) back to the spawn point.
    ResetToSpawn(Vec2),
    /// Tear down and rebuild the level.
    Reload,
}
