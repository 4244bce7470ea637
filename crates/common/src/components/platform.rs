use bevy::{prelude::{Component, Vec3}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

#[derive(Default, Component, InspectorOptions, Reflect, Clone, Debug)]
#[reflect(InspectorOptions)]
pub struct MovingPlatform {
    pub origin: Vec3,
    pub range: f32,
    pub speed: f32,
}

impl MovingPlatform {
    /// Horizontal offset from `origin` after `elapsed` seconds.
    pub fn offset(&self, elapsed: f32) -> f32 {
        ping_pong(elapsed * self.speed, self.range)
    }
}

/// Bounces `t` back and forth between 0 and `length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }

    let wrapped = t.rem_euclid(length * 2.0);
    length - (wrapped - length).abs()
}
