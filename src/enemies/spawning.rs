//! Spawn placement and periodic spawning.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use super::roster::EnemyRoster;
use crate::core::{EnemySpawnedEvent, GameRng, SpawnEnemyEvent, Viewport};
use crate::player::PlayerState;

/// Viewport edge an enemy enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Pick one of the four edges with equal odds.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Point on this edge, `t` in [0, 1] measured along it.
    pub fn point(self, viewport: &Viewport, t: f32) -> Vec2 {
        match self {
            Self::Top => Vec2::new(t * viewport.width, 0.0),
            Self::Bottom => Vec2::new(t * viewport.width, viewport.height),
            Self::Left => Vec2::new(0.0, t * viewport.height),
            Self::Right => Vec2::new(viewport.width, t * viewport.height),
        }
    }

    /// Uniformly random point on a uniformly random edge.
    pub fn random_point(viewport: &Viewport, rng: &mut impl Rng) -> Vec2 {
        let edge = Self::random(rng);
        edge.point(viewport, rng.gen::<f32>())
    }
}

/// Repeating timer that drives periodic spawns.
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn from_secs(secs: f32) -> Self {
        let duration = Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX);
        Self(Timer::new(duration, TimerMode::Repeating))
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::from_secs(2.0)
    }
}

/// Request a spawn each time the timer fires, while there's room.
pub fn tick_spawn_timer(
    time: Res<Time>,
    roster: Res<EnemyRoster>,
    mut timer: ResMut<SpawnTimer>,
    mut spawn_events: EventWriter<SpawnEnemyEvent>,
) {
    timer.0.tick(time.delta());

    // A long frame can finish the timer several times; never overfill
    let room = roster.tuning().max_enemies.saturating_sub(roster.len());
    let due = (timer.0.times_finished_this_tick() as usize).min(room);
    for _ in 0..due {
        spawn_events.send(SpawnEnemyEvent::default());
    }
}

/// Spawn one enemy per request, on a random viewport edge.
pub fn handle_spawn_requests(
    mut spawn_requests: EventReader<SpawnEnemyEvent>,
    mut spawned_events: EventWriter<EnemySpawnedEvent>,
    mut roster: ResMut<EnemyRoster>,
    mut rng: ResMut<GameRng>,
    player: Res<PlayerState>,
    viewport: Res<Viewport>,
) {
    for request in spawn_requests.read() {
        let id = roster.spawn_enemy(player.speed, &viewport, request.image.clone(), &mut rng.0);
        if let Some(enemy) = roster.get(id) {
            debug!(
                "Spawned enemy {} at ({:.0}, {:.0}), radius {}, speed {}",
                id, enemy.position.x, enemy.position.y, enemy.radius, enemy.speed
            );
        }
        spawned_events.send(EnemySpawnedEvent { id });
    }
}
