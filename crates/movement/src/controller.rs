//! The character controller.
//!
//! A plain stateful object with two entry points: [`CharacterController::on_frame_tick`]
//! at render cadence and [`CharacterController::on_physics_tick`] at the
//! fixed physics cadence. It owns no scheduling; the host calls both.

use bevy::prelude::{info, Component, Vec2};

use crate::aim;
use crate::config::ControllerConfig;
use crate::error::ConfigError;
use crate::horizontal;
use crate::intent::{Intent, IntentLatch};
use crate::jumping;
use crate::lifecycle::{self, LevelLifecycle, LifecycleOutcome};
use crate::magnetism;
use crate::output::{ControllerEvent, ControllerOutput};
use crate::physics::PhysicsWorld;
use crate::sensors::SensorGrid;
use crate::state::CharacterState;

#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    config: ControllerConfig,
    sensors: SensorGrid,
    spawn: Vec2,
    state: CharacterState,
    latch: IntentLatch,
    output: ControllerOutput,
}

impl CharacterController {
    pub fn new(
        config: ControllerConfig,
        sensors: SensorGrid,
        spawn: Vec2,
        base_gravity_scale: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if !(base_gravity_scale.is_finite() && base_gravity_scale >= 0.0) {
            return Err(ConfigError::InvalidTuning {
                field: "base_gravity_scale",
                value: base_gravity_scale,
            });
        }

        let state = CharacterState::new(spawn, config.start_facing_right, base_gravity_scale);
        let output = ControllerOutput {
            facing_right: state.facing_right,
            aim: state.facing_direction(),
            ..Default::default()
        };

        Ok(Self {
            config,
            sensors,
            spawn,
            state,
            latch: IntentLatch::default(),
            output,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Swap tuning at runtime. The current state is kept.
    pub fn set_config(&mut self, config: ControllerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn sensors(&self) -> &SensorGrid {
        &self.sensors
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Output of the last physics tick.
    pub fn output(&self) -> &ControllerOutput {
        &self.output
    }

    /// Intent the next physics tick will consume.
    pub fn pending_intent(&self) -> Intent {
        self.latch.peek()
    }

    pub fn is_won(&self) -> bool {
        self.state.won
    }

    /// Latch a frame's input. A confirm while won reloads the level.
    pub fn on_frame_tick<L: LevelLifecycle + ?Sized>(&mut self, frame: Intent, level: &mut L) {
        self.latch.latch(frame);

        if self.latch.take_confirm() && self.state.won {
            info!("level complete, reloading");
            level.reload_level();
        }
    }

    /// Run one fixed physics step and hand the summed force to `world`.
    pub fn on_physics_tick<W, L>(&mut self, world: &mut W, level: &mut L) -> &ControllerOutput
    where
        W: PhysicsWorld + ?Sized,
        L: LevelLifecycle + ?Sized,
    {
        let intent = self.latch.take();
        let mut events = Vec::new();

        self.state.position = world.position();
        self.state.velocity = world.velocity();

        if self.state.won {
            self.freeze(world);
            return self.finish_without_motion(events);
        }

        self.state.facts = self.sensors.refresh(&*world, self.state.position, self.state.facing_right);

        match lifecycle::check(&self.state.facts, &intent) {
            LifecycleOutcome::Continue => {}
            LifecycleOutcome::Died => {
                info!("player died at {:?}, back to spawn", self.state.position);
                self.respawn(world, level, &mut events);
                events.push(ControllerEvent::Died);
                return self.finish_without_motion(events);
            }
            LifecycleOutcome::Respawned => {
                self.respawn(world, level, &mut events);
                return self.finish_without_motion(events);
            }
            LifecycleOutcome::Won => {
                info!("player reached the goal");
                magnetism::release(&mut self.state, &mut events);
                self.state.won = true;
                self.freeze(world);
                events.push(ControllerEvent::Won);
                return self.finish_without_motion(events);
            }
        }

        let detected = world.magnets_in_circle(self.state.position, self.config.magnet_range);
        let nearest = magnetism::select_target(&detected, self.state.position);
        let active = magnetism::transition(
            &*world,
            &intent,
            nearest,
            self.config.magnet_range,
            &mut self.state,
            &mut events,
        );

        let walk = horizontal::integrate(
            &self.config,
            &mut self.state,
            intent.horizontal,
            intent.crouch,
            intent.push_held,
            world.mass(),
        );

        let jump = jumping::apply(&self.config, &intent, &mut self.state);
        if jump.jumped {
            events.push(ControllerEvent::Jumped);
        }

        let magnet = magnetism::apply(&self.config, &intent, active.as_ref(), &mut self.state, &mut events);

        let mut force = Vec2::new(walk.force, jump.force) + magnet.force;
        let mut gravity_scale = jump.gravity_scale;

        if magnet.docked {
            force = Vec2::ZERO;
            gravity_scale = 0.0;
            self.state.velocity = Vec2::ZERO;
            world.set_velocity(Vec2::ZERO);
        }

        world.set_gravity_scale(gravity_scale);
        world.apply_force(force);

        let aim = aim::resolve(
            &self.state,
            self.config.arm_pivot(),
            active.as_ref(),
            nearest.as_ref(),
            intent.horizontal,
            intent.vertical,
        );

        self.output = ControllerOutput {
            speed: walk.speed,
            grounded: self.state.facts.grounded,
            crouching: self.state.crouching,
            facing_right: self.state.facing_right,
            aim: aim.direction,
            arm_rotation: aim.arm_rotation,
            magnet_state: self.state.magnet_state,
            applied_force: force,
            events,
        };

        &self.output
    }

    fn freeze<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        self.state.velocity = Vec2::ZERO;
        world.set_velocity(Vec2::ZERO);
        world.set_gravity_scale(0.0);
        world.apply_force(Vec2::ZERO);
    }

    fn respawn<W, L>(&mut self, world: &mut W, level: &mut L, events: &mut Vec<ControllerEvent>)
    where
        W: PhysicsWorld + ?Sized,
        L: LevelLifecycle + ?Sized,
    {
        magnetism::release(&mut self.state, events);
        self.state.reset_to_spawn(self.spawn, self.config.start_facing_right);

        world.set_position(self.spawn);
        world.set_velocity(Vec2::ZERO);
        world.set_gravity_scale(self.state.base_gravity_scale);
        world.apply_force(Vec2::ZERO);

        level.reset_to_spawn(self.spawn);
    }

    fn finish_without_motion(&mut self, events: Vec<ControllerEvent>) -> &ControllerOutput {
        let facing = self.state.facing_direction();
        self.output = ControllerOutput {
            speed: 0.0,
            grounded: self.state.facts.grounded,
            crouching: self.state.crouching,
            facing_right: self.state.facing_right,
            aim: facing,
            arm_rotation: 0.0,
            magnet_state: self.state.magnet_state,
            applied_force: Vec2::ZERO,
            events,
        };
        &self.output
    }
}
