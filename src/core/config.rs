//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking player stats, weapons and enemy behavior without
//! recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::ConfigError;
use super::viewport::Viewport;
use crate::enemies::EnemyTuning;
use crate::player::PlayerDefinition;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playable area used until a window reports its size
    pub viewport: Viewport,
    pub player: PlayerDefinition,
    pub enemies: EnemyTuning,
    /// Fixed seed for the random source (None = seed from entropy)
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse and validate a config from RON text.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config at `path`.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(path, &contents)
    }

    /// Load the config from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_file(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_finite("viewport.width", self.viewport.width)?;
        ConfigError::require_finite("viewport.height", self.viewport.height)?;
        if self.viewport.width < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport.width",
                value: self.viewport.width,
            });
        }
        if self.viewport.height < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport.height",
                value: self.viewport.height,
            });
        }
        self.player.validate()?;
        self.enemies.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::enemies::{EnemyBehavior, EnemyRoster, WanderTuning};

    const FULL_CONFIG: &str = r#"
        (
            viewport: (width: 800.0, height: 600.0),
            player: (
                position: (10.0, 20.0),
                speed: 8.0,
                max_health: 120.0,
                weapons: {
                    "katana": (damage: 20.0, range: 50.0),
                    "bow": (damage: 12.0, range: 300.0),
                },
                starting_weapon: "bow",
            ),
            enemies: (
                speed_factor: 0.5,
                spawn_interval_secs: 1.5,
                max_enemies: 10,
                behavior: Chase(radius: 20.0),
            ),
            seed: Some(42),
        )
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::from_ron_str("inline", FULL_CONFIG).unwrap();

        assert_eq!(config.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(config.player.position, (10.0, 20.0));
        assert_eq!(config.player.starting_weapon, "bow");
        assert_eq!(config.player.weapons.len(), 2);
        assert_eq!(config.enemies.max_enemies, 10);
        assert!(matches!(config.enemies.behavior, EnemyBehavior::Chase { radius } if radius == 20.0));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GameConfig::from_ron_str("inline", "(seed: Some(7))").unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player.starting_weapon, "katana");
        assert!(matches!(config.enemies.behavior, EnemyBehavior::Wander(_)));
    }

    #[test]
    fn test_unknown_starting_weapon_is_rejected() {
        let text = r#"(player: (starting_weapon: "spoon"))"#;
        let err = GameConfig::from_ron_str("inline", text).unwrap_err();

        assert!(matches!(err, ConfigError::UnknownStartingWeapon(name) if name == "spoon"));
    }

    #[test]
    fn test_inverted_radius_range_is_rejected() {
        let text = r#"(
            enemies: (
                behavior: Wander((
                    flee_radius: 300.0,
                    min_heading_secs: 1.0,
                    max_heading_secs: 3.0,
                    min_radius: 60,
                    max_radius: 30,
                )),
            ),
        )"#;
        let err = GameConfig::from_ron_str("inline", text).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidRange { field: "enemies.behavior.radius", .. }));
    }

    #[test]
    fn test_non_finite_heading_is_rejected() {
        let mut config = GameConfig::default();
        config.enemies.behavior = EnemyBehavior::Wander(WanderTuning {
            max_heading_secs: f32::INFINITY,
            ..default()
        });

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "enemies.behavior.max_heading_secs", .. })
        ));
    }

    #[test]
    fn test_nan_player_health_is_rejected() {
        let mut config = GameConfig::default();
        config.player.max_health = f32::NAN;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "player.max_health", .. })
        ));
    }

    #[test]
    fn test_huge_heading_interval_spawns_without_panic() {
        let text = r#"(
            enemies: (
                behavior: Wander((
                    flee_radius: 300.0,
                    min_heading_secs: 1.0,
                    max_heading_secs: 1e30,
                    min_radius: 30,
                    max_radius: 60,
                )),
            ),
            seed: Some(3),
        )"#;
        let config = GameConfig::from_ron_str("inline", text).unwrap();
        let mut roster = EnemyRoster::new(config.enemies.clone());
        let mut rng = GameRng::from_seed(config.seed);

        let id = roster.spawn_enemy(10.0, &config.viewport, None, &mut rng.0);
        assert!(roster.get(id).is_some());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = GameConfig::from_ron_str("inline", "not ron at all {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = GameConfig::from_file("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let config = GameConfig::from_file(CONFIG_PATH).unwrap();
        assert!(config.player.weapons.contains_key(&config.player.starting_weapon));
    }
}
