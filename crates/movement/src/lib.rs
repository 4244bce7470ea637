use bevy::prelude::{App, FixedUpdate, IntoSystemConfigs, Plugin};
use bevy_rapier2d::prelude::PhysicsSet;
use output::ControllerEvent;
use systems::physics_tick;

pub mod aim;
pub mod config;
pub mod controller;
pub mod error;
pub mod horizontal;
pub mod intent;
pub mod jumping;
pub mod lifecycle;
pub mod magnetism;
pub mod math;
pub mod output;
pub mod physics;
pub mod rapier;
pub mod sensors;
pub mod state;
pub mod systems;

pub mod prelude {
    pub use crate::config::ControllerConfig;
    pub use crate::controller::CharacterController;
    pub use crate::error::ConfigError;
    pub use crate::intent::{Intent, IntentLatch};
    pub use crate::lifecycle::LevelLifecycle;
    pub use crate::output::{ControllerEvent, ControllerOutput};
    pub use crate::physics::{Aabb, MagnetTarget, PhysicsWorld, TargetHandle};
    pub use crate::sensors::{EnvironmentFacts, SensorGrid, SensorKind, SensorSpec, SurfaceMask};
    pub use crate::state::{CharacterState, MagnetState};
    pub use crate::MovementPlugin;
}

#[derive(Debug, Default)]
pub struct MovementPlugin {}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<ControllerEvent>()
            .add_systems(FixedUpdate, physics_tick.before(PhysicsSet::SyncBackend));
    }
}
