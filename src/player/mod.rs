//! Player module - position, health and weapons.

mod components;
mod data;
mod plugin;
mod systems;

pub use components::*;
pub use data::PlayerDefinition;
pub use plugin::PlayerPlugin;
