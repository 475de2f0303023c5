//! Enemy systems - per-frame movement, removal and player attacks.

use bevy::prelude::*;

use super::roster::EnemyRoster;
use super::spawning::SpawnTimer;
use crate::core::{
    EnemyRemovedEvent, GameConfig, GameRng, PlayerAttackEvent, RemoveEnemyEvent, Viewport,
};
use crate::player::PlayerState;

/// Start every game with an empty roster and a fresh spawn timer.
pub fn setup_enemies(mut commands: Commands, config: Res<GameConfig>) {
    info!(
        "Enemy roster ready: {:?}, spawning every {}s",
        config.enemies.behavior, config.enemies.spawn_interval_secs
    );
    commands.insert_resource(EnemyRoster::new(config.enemies.clone()));
    commands.insert_resource(SpawnTimer::from_secs(config.enemies.spawn_interval_secs));
}

/// Move every enemy one step relative to the player.
pub fn update_enemy_positions(
    time: Res<Time>,
    viewport: Res<Viewport>,
    player: Res<PlayerState>,
    mut rng: ResMut<GameRng>,
    mut roster: ResMut<EnemyRoster>,
) {
    roster.update_positions(player.position, &viewport, time.delta(), &mut rng.0);
}

pub fn handle_remove_requests(
    mut remove_requests: EventReader<RemoveEnemyEvent>,
    mut removed_events: EventWriter<EnemyRemovedEvent>,
    mut roster: ResMut<EnemyRoster>,
) {
    for request in remove_requests.read() {
        if roster.remove_enemy(request.id).is_some() {
            debug!("Removed enemy {}", request.id);
            removed_events.send(EnemyRemovedEvent { id: request.id });
        }
    }
}

/// Remove every enemy within reach of the player's current weapon.
pub fn resolve_player_attacks(
    mut attack_events: EventReader<PlayerAttackEvent>,
    mut removed_events: EventWriter<EnemyRemovedEvent>,
    player: Res<PlayerState>,
    mut roster: ResMut<EnemyRoster>,
) {
    for _ in attack_events.read() {
        let hits = roster.ids_within(player.position, player.current_weapon_range());
        debug!("{} swing hit {} enemies", player.current_weapon(), hits.len());

        for id in hits {
            roster.remove_enemy(id);
            removed_events.send(EnemyRemovedEvent { id });
        }
    }
}
