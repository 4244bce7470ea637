use bevy::prelude::{Component, Resource, Vec2};

#[derive(Clone, Component, Debug, Default)]
pub struct SpawnPoint {}

#[derive(Clone, Component, Debug, Default)]
pub struct WallDefinition {}

/// Touching this kills the player.
#[derive(Clone, Component, Debug, Default)]
pub struct Hazard {}

/// Touching this wins the level.
#[derive(Clone, Component, Debug, Default)]
pub struct WinZone {}

/// Removed when the level is reloaded.
#[derive(Clone, Component, Debug, Default)]
pub struct Despawnable {}

/// Playable area, from the origin to `size`.
#[derive(Clone, Resource, Debug, Default)]
pub struct LevelBounds {
    pub size: Vec2,
}
