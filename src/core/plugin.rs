//! Core plugin that sets up config, game states, events and shared resources.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::rng::GameRng;
use super::states::*;
use super::viewport::{sync_viewport, Viewport};

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The game config (loaded from disk unless one was inserted already)
/// - Game states (Loading, InGame, GameOver)
/// - Global events (SpawnEnemyEvent, PlayerDamageEvent, etc.)
/// - The viewport and the shared random source
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }
        let config = app.world().resource::<GameConfig>().clone();

        app
            .insert_resource(config.viewport)
            .insert_resource(GameRng::from_seed(config.seed))

            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<SpawnEnemyEvent>()
            .add_event::<RemoveEnemyEvent>()
            .add_event::<PlayerDamageEvent>()
            .add_event::<PlayerHealEvent>()
            .add_event::<SwitchWeaponEvent>()
            .add_event::<PlayerAttackEvent>()
            .add_event::<EnemySpawnedEvent>()
            .add_event::<EnemyRemovedEvent>()
            .add_event::<PlayerDeathEvent>()

            // Nothing to load yet - resources are built when entering InGame
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game)
            .add_systems(OnEnter(GameState::GameOver), announce_game_over)

            // Keep the playable area in step with the window
            .add_systems(PreUpdate, sync_viewport);
    }
}

fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    info!("Starting game");
    next_state.set(GameState::InGame);
}

fn announce_game_over() {
    info!("Game over");
}
