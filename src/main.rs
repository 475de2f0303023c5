//! Edge Swarm - Entry Point
//!
//! Runs the game-state layer in a window. Enemies spawn on the window
//! edges on a timer; the window size is the playable area.

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Edge Swarm".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(edge_swarm::EdgeSwarmPlugin)

        .run();
}
