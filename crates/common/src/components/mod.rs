pub mod facing;
pub mod level;
pub mod metal;
pub mod platform;
pub mod player;
pub mod ui;
