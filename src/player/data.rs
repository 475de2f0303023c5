//! Player definition loaded from the game config.

use serde::Deserialize;
use std::collections::HashMap;

use super::components::Weapon;
use crate::core::ConfigError;

/// Starting stats and weapon table for the player.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PlayerDefinition {
    pub position: (f32, f32),
    pub speed: f32,
    pub max_health: f32,
    pub weapons: HashMap<String, Weapon>,
    pub starting_weapon: String,
}

impl Default for PlayerDefinition {
    fn default() -> Self {
        let weapons = HashMap::from([
            (
                "katana".to_string(),
                Weapon {
                    damage: 20.0,
                    range: 50.0,
                },
            ),
            (
                "flamethrower".to_string(),
                Weapon {
                    damage: 10.0,
                    range: 150.0,
                },
            ),
        ]);

        Self {
            position: (50.0, 50.0),
            speed: 10.0,
            max_health: 100.0,
            weapons,
            starting_weapon: "katana".to_string(),
        }
    }
}

impl PlayerDefinition {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weapons.contains_key(&self.starting_weapon) {
            return Err(ConfigError::UnknownStartingWeapon(
                self.starting_weapon.clone(),
            ));
        }
        ConfigError::require_finite("player.position.x", self.position.0)?;
        ConfigError::require_finite("player.position.y", self.position.1)?;
        ConfigError::require_finite("player.speed", self.speed)?;
        ConfigError::require_finite("player.max_health", self.max_health)?;
        for weapon in self.weapons.values() {
            ConfigError::require_finite("player.weapons.damage", weapon.damage)?;
            ConfigError::require_finite("player.weapons.range", weapon.range)?;
        }
        if self.max_health <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "player.max_health",
                value: self.max_health,
            });
        }
        if self.speed < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "player.speed",
                value: self.speed,
            });
        }
        Ok(())
    }
}
