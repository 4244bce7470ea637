use bevy::prelude::{Entity, EventWriter, Query, Res, Transform, With};
use bevy_rapier2d::prelude::{ColliderMassProperties, ExternalForce, GravityScale, RapierContext, Velocity};
use mb_common::{components::player::Player, events::LevelCommand};

use crate::controller::CharacterController;
use crate::output::{ControllerEvent, ControllerOutput};
use crate::rapier::{BodyState, MagnetQuery, RapierWorld};

fn body_mass(mass_properties: Option<&ColliderMassProperties>) -> f32 {
    match mass_properties {
        Some(ColliderMassProperties::Mass(mass)) if *mass > 0.0 => *mass,
        _ => 1.0,
    }
}

/// Fixed-step controller update, run before Rapier reads the bodies.
pub fn physics_tick(
    rapier_context: Res<RapierContext>,
    q_magnets: MagnetQuery,
    mut q_player: Query<(
        Entity,
        &mut CharacterController,
        &mut ControllerOutput,
        &mut Transform,
        &mut Velocity,
        &mut ExternalForce,
        &mut GravityScale,
        Option<&ColliderMassProperties>,
    ), With<Player>>,
    mut level_commands: EventWriter<LevelCommand>,
    mut controller_events: EventWriter<ControllerEvent>,
) {
    for (entity, mut controller, mut output, mut transform, mut velocity, mut force, mut gravity, mass) in q_player.iter_mut() {
        let body = BodyState {
            position: transform.translation.truncate(),
            velocity: velocity.linvel,
            force: force.force,
            gravity_scale: gravity.0,
            mass: body_mass(mass),
            teleported: false,
        };

        let mut world = RapierWorld::new(&rapier_context, &q_magnets, entity, body);
        let tick_output = controller.on_physics_tick(&mut world, &mut level_commands).clone();
        let body = world.into_body_state();

        if body.teleported {
            transform.translation.x = body.position.x;
            transform.translation.y = body.position.y;
        }

        velocity.linvel = body.velocity;
        force.force = body.force;
        gravity.0 = body.gravity_scale;

        controller_events.send_batch(tick_output.events.iter().copied());
        *output = tick_output;
    }
}
