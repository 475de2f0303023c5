//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Enemy movement
//! and spawning only run while `InGame`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while resources are built from config
/// - Enter `InGame` once the player and roster exist
/// - `GameOver` when the player's health reaches zero
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - building resources from config
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Player has died
    GameOver,
}
