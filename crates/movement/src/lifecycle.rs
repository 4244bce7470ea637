//! Death, win and respawn handling.

use bevy::prelude::{EventWriter, Vec2};
use mb_common::events::LevelCommand;

use crate::intent::Intent;
use crate::sensors::EnvironmentFacts;

/// Scene-level actions the controller can request.
pub trait LevelLifecycle {
    /// Move anything tied to the player (camera anchor, props) back to spawn.
    fn reset_to_spawn(&mut self, spawn: Vec2);

    /// Tear the level down and build it again.
    fn reload_level(&mut self);
}

impl<'w> LevelLifecycle for EventWriter<'w, LevelCommand> {
    fn reset_to_spawn(&mut self, spawn: Vec2) {
        self.send(LevelCommand::ResetToSpawn(spawn));
    }

    fn reload_level(&mut self) {
        self.send(LevelCommand::Reload);
    }
}

impl LevelLifecycle for Vec<LevelCommand> {
    fn reset_to_spawn(&mut self, spawn: Vec2) {
        self.push(LevelCommand::ResetToSpawn(spawn));
    }

    fn reload_level(&mut self) {
        self.push(LevelCommand::Reload);
    }
}

/// What the lifecycle check decided for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    Continue,
    /// Touched a hazard.
    Died,
    /// Restart requested by the player.
    Respawned,
    Won,
}

impl LifecycleOutcome {
    /// Whether the rest of the tick is skipped.
    pub fn short_circuits(self) -> bool {
        self != LifecycleOutcome::Continue
    }
}

/// Hazard wins over the win zone when both overlap.
pub fn check(facts: &EnvironmentFacts, intent: &Intent) -> LifecycleOutcome {
    if facts.on_hazard {
        LifecycleOutcome::Died
    } else if intent.respawn_edge {
        LifecycleOutcome::Respawned
    } else if facts.on_win {
        LifecycleOutcome::Won
    } else {
        LifecycleOutcome::Continue
    }
}
