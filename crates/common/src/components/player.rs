use bevy::{prelude::Component, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

#[derive(Component, InspectorOptions, Default, Reflect)]
#[reflect(InspectorOptions)]
pub struct Player {}

/// Child container holding the player's sprites; mirrored when facing flips.
#[derive(Component, Debug, Default)]
pub struct PlayerVisual {}

/// Secondary visual rotated towards the aim direction.
#[derive(Component, Debug, Default)]
pub struct ArmPivot {}
