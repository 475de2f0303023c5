//! Player state and weapons.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use super::data::PlayerDefinition;
use crate::core::ConfigError;

/// Damage and reach of a single weapon.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Weapon {
    pub damage: f32,
    /// Attack range in world units
    pub range: f32,
}

/// Errors from weapon selection.
#[derive(Debug, Error, PartialEq)]
pub enum WeaponError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
}

/// The player: position, health and weapon set.
///
/// `current_weapon` always names an entry in `weapons`, so the weapon
/// lookups never fail.
#[derive(Resource, Clone, Debug)]
pub struct PlayerState {
    pub position: Vec2,
    /// Movement speed; enemies derive their speed from it at spawn
    pub speed: f32,
    max_health: f32,
    current_health: f32,
    weapons: HashMap<String, Weapon>,
    current_weapon: String,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::build(&PlayerDefinition::default())
    }
}

impl PlayerState {
    /// Build the player from its config definition, at full health.
    pub fn from_definition(definition: &PlayerDefinition) -> Result<Self, ConfigError> {
        definition.validate()?;
        Ok(Self::build(definition))
    }

    fn build(definition: &PlayerDefinition) -> Self {
        Self {
            position: Vec2::new(definition.position.0, definition.position.1),
            speed: definition.speed,
            max_health: definition.max_health,
            current_health: definition.max_health,
            weapons: definition.weapons.clone(),
            current_weapon: definition.starting_weapon.clone(),
        }
    }

    /// Shift the player by `delta`. No bounds are applied.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Apply damage, never dropping below zero. Returns the damage taken.
    ///
    /// Health stays within [0, max] even for negative amounts.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let before = self.current_health;
        self.current_health = (self.current_health - amount).clamp(0.0, self.max_health);
        before - self.current_health
    }

    /// Restore health, never exceeding the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.current_health;
        self.current_health = (self.current_health + amount).clamp(0.0, self.max_health);
        self.current_health - before
    }

    /// Select a weapon by name. Unknown names leave the selection as is.
    pub fn switch_weapon(&mut self, weapon: &str) -> Result<(), WeaponError> {
        if !self.weapons.contains_key(weapon) {
            return Err(WeaponError::UnknownWeapon(weapon.to_string()));
        }
        self.current_weapon = weapon.to_string();
        Ok(())
    }

    pub fn current_weapon(&self) -> &str {
        &self.current_weapon
    }

    pub fn current_weapon_damage(&self) -> f32 {
        self.equipped().damage
    }

    pub fn current_weapon_range(&self) -> f32 {
        self.equipped().range
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        self.current_health / self.max_health
    }

    fn equipped(&self) -> &Weapon {
        // switch_weapon and from_definition only ever store known keys
        &self.weapons[&self.current_weapon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = PlayerState::default();

        assert_eq!(player.position, Vec2::new(50.0, 50.0));
        assert_eq!(player.current_health(), 100.0);
        assert_eq!(player.max_health(), 100.0);
        assert_eq!(player.current_weapon(), "katana");
        assert_eq!(player.current_weapon_damage(), 20.0);
        assert_eq!(player.current_weapon_range(), 50.0);
    }

    #[test]
    fn test_move_is_unbounded() {
        let mut player = PlayerState::default();

        player.move_by(Vec2::new(-100.0, 5.0));
        assert_eq!(player.position, Vec2::new(-50.0, 55.0));
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut player = PlayerState::default();

        assert_eq!(player.take_damage(30.0), 30.0);
        assert_eq!(player.current_health(), 70.0);

        assert_eq!(player.take_damage(500.0), 70.0);
        assert_eq!(player.current_health(), 0.0);
        assert!(player.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut player = PlayerState::default();
        player.take_damage(10.0);

        assert_eq!(player.heal(25.0), 10.0);
        assert_eq!(player.current_health(), 100.0);
        assert_eq!(player.health_fraction(), 1.0);
    }

    #[test]
    fn test_health_stays_in_bounds() {
        let mut player = PlayerState::default();
        let amounts = [35.0, -20.0, 80.0, 5.0, 250.0, -400.0, 60.0, 12.5];

        for (i, amount) in amounts.iter().enumerate() {
            if i % 2 == 0 {
                player.take_damage(*amount);
            } else {
                player.heal(*amount);
            }
            assert!(player.current_health() >= 0.0);
            assert!(player.current_health() <= player.max_health());
        }
    }

    #[test]
    fn test_switch_weapon() {
        let mut player = PlayerState::default();

        player.switch_weapon("flamethrower").unwrap();
        assert_eq!(player.current_weapon(), "flamethrower");
        assert_eq!(player.current_weapon_damage(), 10.0);
        assert_eq!(player.current_weapon_range(), 150.0);
    }

    #[test]
    fn test_unknown_weapon_keeps_selection() {
        let mut player = PlayerState::default();

        let err = player.switch_weapon("bazooka").unwrap_err();
        assert_eq!(err, WeaponError::UnknownWeapon("bazooka".to_string()));
        assert_eq!(player.current_weapon(), "katana");
        assert_eq!(player.current_weapon_damage(), 20.0);
    }

    #[test]
    fn test_definition_with_unknown_starting_weapon_fails() {
        let definition = PlayerDefinition {
            starting_weapon: "spoon".to_string(),
            ..default()
        };

        assert!(PlayerState::from_definition(&definition).is_err());
    }
}
