//! Player systems - apply health and weapon requests from events.

use bevy::prelude::*;

use super::components::PlayerState;
use crate::core::{
    GameConfig, GameState, PlayerDamageEvent, PlayerDeathEvent, PlayerHealEvent,
    SwitchWeaponEvent,
};

/// (Re)build the player from config when gameplay starts.
pub fn setup_player(mut commands: Commands, config: Res<GameConfig>) {
    let player = match PlayerState::from_definition(&config.player) {
        Ok(player) => player,
        Err(e) => {
            error!("Invalid player definition: {}. Using defaults.", e);
            PlayerState::default()
        }
    };

    info!(
        "Player ready at ({}, {}) with {} health, wielding {}",
        player.position.x,
        player.position.y,
        player.max_health(),
        player.current_weapon()
    );
    commands.insert_resource(player);
}

/// Apply incoming damage and announce death once health hits zero.
pub fn apply_player_damage(
    mut damage_events: EventReader<PlayerDamageEvent>,
    mut death_events: EventWriter<PlayerDeathEvent>,
    mut player: ResMut<PlayerState>,
) {
    for event in damage_events.read() {
        // Already dead - nothing left to take
        if player.is_dead() {
            continue;
        }

        let taken = player.take_damage(event.amount);
        debug!(
            "Player took {} damage ({} / {})",
            taken,
            player.current_health(),
            player.max_health()
        );

        if player.is_dead() {
            death_events.send(PlayerDeathEvent);
        }
    }
}

pub fn apply_player_heal(mut heal_events: EventReader<PlayerHealEvent>, mut player: ResMut<PlayerState>) {
    for event in heal_events.read() {
        if player.is_dead() {
            continue;
        }

        let healed = player.heal(event.amount);
        debug!("Player healed {} ({} / {})", healed, player.current_health(), player.max_health());
    }
}

/// Switch weapons on request, ignoring names the player doesn't carry.
pub fn switch_player_weapon(
    mut switch_events: EventReader<SwitchWeaponEvent>,
    mut player: ResMut<PlayerState>,
) {
    for event in switch_events.read() {
        match player.switch_weapon(&event.weapon) {
            Ok(()) => info!("Switched weapon to {}", event.weapon),
            Err(e) => warn!("Weapon switch rejected: {}", e),
        }
    }
}

/// Move to GameOver when the player dies.
pub fn handle_player_death(
    mut death_events: EventReader<PlayerDeathEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if death_events.read().next().is_some() {
        info!("Player died - game over");
        next_state.set(GameState::GameOver);
    }
}
