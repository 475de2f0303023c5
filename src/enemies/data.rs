//! Enemy tuning loaded from the game config.

use serde::Deserialize;

use crate::core::ConfigError;

/// Tuning for wandering enemies.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WanderTuning {
    /// Enemies flee when the player is this close (inclusive)
    pub flee_radius: f32,
    /// Heading changes happen after a random interval in this range
    pub min_heading_secs: f32,
    pub max_heading_secs: f32,
    /// Spawn radius is a random whole number in this range
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for WanderTuning {
    fn default() -> Self {
        Self {
            flee_radius: 300.0,
            min_heading_secs: 1.0,
            max_heading_secs: 3.0,
            min_radius: 30,
            max_radius: 60,
        }
    }
}

/// How every enemy in the roster moves.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub enum EnemyBehavior {
    /// Head straight for the player.
    Chase { radius: f32 },
    /// Wander on a random heading, fleeing when the player comes close.
    Wander(WanderTuning),
}

impl Default for EnemyBehavior {
    fn default() -> Self {
        Self::Wander(WanderTuning::default())
    }
}

/// Roster-wide enemy settings.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EnemyTuning {
    /// Enemy speed as a fraction of the player's speed at spawn time
    pub speed_factor: f32,
    pub spawn_interval_secs: f32,
    /// Periodic spawning pauses while the roster is this full
    pub max_enemies: usize,
    pub behavior: EnemyBehavior,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed_factor: 0.5,
            spawn_interval_secs: 2.0,
            max_enemies: 50,
            behavior: EnemyBehavior::default(),
        }
    }
}

impl EnemyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_finite("enemies.speed_factor", self.speed_factor)?;
        ConfigError::require_finite("enemies.spawn_interval_secs", self.spawn_interval_secs)?;
        if self.speed_factor < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "enemies.speed_factor",
                value: self.speed_factor,
            });
        }
        if self.spawn_interval_secs <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "enemies.spawn_interval_secs",
                value: self.spawn_interval_secs,
            });
        }

        match &self.behavior {
            EnemyBehavior::Chase { radius } => {
                ConfigError::require_finite("enemies.behavior.radius", *radius)?;
                if *radius < 0.0 {
                    return Err(ConfigError::InvalidValue {
                        field: "enemies.behavior.radius",
                        value: *radius,
                    });
                }
            }
            EnemyBehavior::Wander(wander) => {
                ConfigError::require_finite("enemies.behavior.flee_radius", wander.flee_radius)?;
                ConfigError::require_finite(
                    "enemies.behavior.min_heading_secs",
                    wander.min_heading_secs,
                )?;
                ConfigError::require_finite(
                    "enemies.behavior.max_heading_secs",
                    wander.max_heading_secs,
                )?;
                if wander.min_heading_secs <= 0.0 {
                    return Err(ConfigError::InvalidValue {
                        field: "enemies.behavior.min_heading_secs",
                        value: wander.min_heading_secs,
                    });
                }
                if wander.min_heading_secs > wander.max_heading_secs {
                    return Err(ConfigError::InvalidRange {
                        field: "enemies.behavior.heading_secs",
                        min: wander.min_heading_secs,
                        max: wander.max_heading_secs,
                    });
                }
                if wander.min_radius > wander.max_radius {
                    return Err(ConfigError::InvalidRange {
                        field: "enemies.behavior.radius",
                        min: wander.min_radius as f32,
                        max: wander.max_radius as f32,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wander_with(tuning: WanderTuning) -> EnemyTuning {
        EnemyTuning {
            behavior: EnemyBehavior::Wander(tuning),
            ..EnemyTuning::default()
        }
    }

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(EnemyTuning::default().validate().is_ok());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let infinite_heading = wander_with(WanderTuning {
            max_heading_secs: f32::INFINITY,
            ..WanderTuning::default()
        });
        assert!(matches!(
            infinite_heading.validate(),
            Err(ConfigError::InvalidValue { field: "enemies.behavior.max_heading_secs", .. })
        ));

        let nan_speed = EnemyTuning {
            speed_factor: f32::NAN,
            ..EnemyTuning::default()
        };
        assert!(nan_speed.validate().is_err());

        let nan_interval = EnemyTuning {
            spawn_interval_secs: f32::NAN,
            ..EnemyTuning::default()
        };
        assert!(nan_interval.validate().is_err());

        let nan_radius = EnemyTuning {
            behavior: EnemyBehavior::Chase { radius: f32::NAN },
            ..EnemyTuning::default()
        };
        assert!(nan_radius.validate().is_err());
    }
}
