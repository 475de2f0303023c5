//! Enemy records kept by the roster.

use bevy::prelude::*;
use std::fmt;

/// Unique enemy identifier, assigned from 1 upwards and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an enemy did on its last update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    /// Just spawned, not updated yet.
    #[default]
    Idle,
    /// Closing in on the player.
    Chase,
    /// Drifting along its own heading.
    Wander,
    /// Running directly away from the player.
    Flee,
}

/// Heading state for wandering enemies.
#[derive(Clone, Debug)]
pub struct WanderState {
    /// Current heading in radians
    pub heading: f32,
    /// Counts down to the next heading change
    pub timer: Timer,
}

/// A single enemy.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub position: Vec2,
    pub radius: f32,
    /// Distance covered per update, fixed at spawn time
    pub speed: f32,
    /// Sprite handle carried for the renderer
    pub image: Option<Handle<Image>>,
    /// Present only for wandering enemies
    pub wander: Option<WanderState>,
    pub phase: MotionPhase,
}

impl Enemy {
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }
}
