//! Player plugin - registers the player resource and its systems.

use bevy::prelude::*;

use super::systems::*;
use crate::core::GameState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fresh player every time gameplay starts
            .add_systems(OnEnter(GameState::InGame), setup_player)
            .add_systems(
                Update,
                (
                    switch_player_weapon,
                    apply_player_heal,
                    apply_player_damage,
                    handle_player_death,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
