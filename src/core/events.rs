//! Global events used for cross-system communication.
//!
//! The host loop (or any other system) talks to the player and the enemy
//! roster through these events instead of reaching into the resources.
//! Request events are read by the owning plugin; notification events are
//! sent back out after the state changed.

use bevy::prelude::*;

use crate::enemies::EnemyId;

/// Request a new enemy on a random viewport edge.
#[derive(Event, Default)]
pub struct SpawnEnemyEvent {
    /// Sprite to carry on the enemy (never loaded or drawn here)
    pub image: Option<Handle<Image>>,
}

/// Request removal of an enemy by id.
#[derive(Event)]
pub struct RemoveEnemyEvent {
    pub id: EnemyId,
}

/// Damage dealt to the player.
#[derive(Event)]
pub struct PlayerDamageEvent {
    pub amount: f32,
}

/// Health restored to the player.
#[derive(Event)]
pub struct PlayerHealEvent {
    pub amount: f32,
}

/// Request a weapon switch by name.
#[derive(Event)]
pub struct SwitchWeaponEvent {
    pub weapon: String,
}

/// The player swings the current weapon.
///
/// Enemies carry no health, so a swing is a one-hit kill: every enemy
/// within the weapon's range is removed. Weapon damage plays no part.
#[derive(Event)]
pub struct PlayerAttackEvent;

/// Sent after an enemy joined the roster.
#[derive(Event)]
pub struct EnemySpawnedEvent {
    pub id: EnemyId,
}

/// Sent after an enemy left the roster.
#[derive(Event)]
pub struct EnemyRemovedEvent {
    pub id: EnemyId,
}

/// Sent once when the player's health reaches zero.
#[derive(Event)]
pub struct PlayerDeathEvent;
