use bevy::{prelude::{Component, Vec2}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

/// A block the player can push off or pull towards.
///
/// `half_extents` mirrors the cuboid collider so the controller can reason
/// about the block's bounding box without touching collider internals.
#[derive(Component, InspectorOptions, Default, Reflect, Debug, Clone, Copy)]
#[reflect(InspectorOptions)]
pub struct MetalBlock {
    pub half_extents: Vec2,
}

impl MetalBlock {
    pub fn new(half_extents: Vec2) -> MetalBlock {
        MetalBlock { half_extents }
    }
}
