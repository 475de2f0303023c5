//! Enemies module - the enemy roster, movement and spawning.

mod components;
mod data;
pub mod movement;
mod plugin;
mod roster;
mod spawning;
mod systems;

pub use components::*;
pub use data::{EnemyBehavior, EnemyTuning, WanderTuning};
pub use plugin::EnemyPlugin;
pub use roster::EnemyRoster;
pub use spawning::{SpawnEdge, SpawnTimer};
