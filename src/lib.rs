//! Edge Swarm - the game-state layer of a small top-down arena game, in Bevy.
//!
//! Enemies enter from the edges of the screen and either hunt the player
//! or wander about and scatter when the player gets close.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Config, game states, global events, viewport, random source
//! - **Player**: Position, health, weapons
//! - **Enemies**: The enemy roster, spawning and per-frame movement
//!
//! Rendering and input are left to the host app; it drives the game by
//! sending the events in [`core`] and reading the [`player::PlayerState`]
//! and [`enemies::EnemyRoster`] resources.

pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct EdgeSwarmPlugin;

impl Plugin for EdgeSwarmPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin);
    }
}
