//! The enemy roster - every live enemy and the rules that move them.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use super::components::{Enemy, EnemyId, MotionPhase, WanderState};
use super::data::{EnemyBehavior, EnemyTuning};
use super::movement::{chase_step, flee_step, heading_step};
use super::spawning::SpawnEdge;
use crate::core::Viewport;

/// All live enemies, in spawn order.
///
/// Player data is passed in per call; the roster never holds on to it.
#[derive(Resource, Debug)]
pub struct EnemyRoster {
    enemies: Vec<Enemy>,
    next_id: u32,
    tuning: EnemyTuning,
}

impl Default for EnemyRoster {
    fn default() -> Self {
        Self::new(EnemyTuning::default())
    }
}

impl EnemyRoster {
    pub fn new(tuning: EnemyTuning) -> Self {
        Self {
            enemies: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    pub fn tuning(&self) -> &EnemyTuning {
        &self.tuning
    }

    /// Add an enemy at a random point on a random viewport edge.
    ///
    /// Its speed is a fixed fraction of `player_speed` as it is right now;
    /// later changes to the player's speed don't carry over.
    pub fn spawn_enemy(
        &mut self,
        player_speed: f32,
        viewport: &Viewport,
        image: Option<Handle<Image>>,
        rng: &mut impl Rng,
    ) -> EnemyId {
        let position = SpawnEdge::random_point(viewport, rng);

        let (radius, wander) = match &self.tuning.behavior {
            EnemyBehavior::Chase { radius } => (*radius, None),
            EnemyBehavior::Wander(wander) => {
                let radius = rng.gen_range(wander.min_radius..=wander.max_radius) as f32;
                (radius, Some(WanderState::random(rng, wander)))
            }
        };

        let id = EnemyId(self.next_id);
        self.next_id += 1;

        self.enemies.push(Enemy {
            id,
            position,
            radius,
            speed: player_speed * self.tuning.speed_factor,
            image,
            wander,
            phase: MotionPhase::Idle,
        });

        id
    }

    /// Move every enemy one step relative to the player.
    ///
    /// `delta` is the frame time; it only drives the wander heading timers.
    pub fn update_positions(
        &mut self,
        player_position: Vec2,
        viewport: &Viewport,
        delta: Duration,
        rng: &mut impl Rng,
    ) {
        match &self.tuning.behavior {
            EnemyBehavior::Chase { .. } => {
                for enemy in &mut self.enemies {
                    enemy.position = chase_step(enemy.position, player_position, enemy.speed);
                    enemy.phase = MotionPhase::Chase;
                }
            }
            EnemyBehavior::Wander(tuning) => {
                for enemy in &mut self.enemies {
                    let wander = enemy
                        .wander
                        .get_or_insert_with(|| WanderState::random(rng, tuning));

                    // Fleeing wins over wandering, with no hysteresis
                    if enemy.position.distance(player_position) <= tuning.flee_radius {
                        enemy.position = flee_step(enemy.position, player_position, enemy.speed);
                        enemy.phase = MotionPhase::Flee;
                    } else {
                        enemy.position = heading_step(enemy.position, wander.heading, enemy.speed);
                        enemy.phase = MotionPhase::Wander;
                    }

                    wander.tick(delta, rng, tuning);
                    enemy.position = viewport.clamp(enemy.position);
                }
            }
        }
    }

    /// Remove the enemy with `id`. Does nothing if there is none.
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Ids of enemies whose body lies within `reach` of `point`.
    pub fn ids_within(&self, point: Vec2, reach: f32) -> Vec<EnemyId> {
        self.enemies
            .iter()
            .filter(|enemy| enemy.distance_to(point) - enemy.radius <= reach)
            .map(|enemy| enemy.id)
            .collect()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Drop every enemy. Ids keep counting up from where they were.
    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}
