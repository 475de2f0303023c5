//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::spawning::{handle_spawn_requests, tick_spawn_timer};
use super::systems::*;
use crate::core::GameState;

/// Enemy plugin - handles spawning, movement and removal.
///
/// Reads `PlayerState`, so it needs the player plugin alongside it.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fresh roster every time gameplay starts
            .add_systems(OnEnter(GameState::InGame), setup_enemies)
            // Requests first, then movement, then anything that removes enemies
            .add_systems(
                Update,
                (
                    tick_spawn_timer,
                    handle_spawn_requests,
                    update_enemy_positions,
                    resolve_player_attacks,
                    handle_remove_requests,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
