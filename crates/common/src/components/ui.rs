use bevy::prelude::Component;

#[derive(Clone, Component, Debug, Default)]
pub struct WinMessageUi {}
