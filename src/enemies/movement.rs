//! Per-update movement steps.
//!
//! Each step covers `speed` world units per call. Steps are not scaled by
//! frame time.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

use super::components::WanderState;
use super::data::WanderTuning;

/// Step from `position` toward `target`.
///
/// Lands exactly on the target once it is within one step.
pub fn chase_step(position: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let offset = target - position;
    let distance = offset.length();

    if distance > speed {
        position + offset / distance * speed
    } else {
        target
    }
}

/// Step from `position` directly away from `threat`.
///
/// Stays put while within one step of the threat, which also covers
/// sitting exactly on top of it.
pub fn flee_step(position: Vec2, threat: Vec2, speed: f32) -> Vec2 {
    let offset = position - threat;
    let distance = offset.length();

    if distance > speed {
        position + offset / distance * speed
    } else {
        position
    }
}

/// Step from `position` along `heading` (radians, 0 = +x).
pub fn heading_step(position: Vec2, heading: f32, speed: f32) -> Vec2 {
    position + Vec2::from_angle(heading) * speed
}

pub fn random_heading(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..TAU)
}

fn random_heading_interval(rng: &mut impl Rng, tuning: &WanderTuning) -> Duration {
    let secs = rng.gen_range(tuning.min_heading_secs..=tuning.max_heading_secs);
    // Intervals too long for a Duration just never run out
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

impl WanderState {
    /// Fresh heading with a fresh countdown.
    pub fn random(rng: &mut impl Rng, tuning: &WanderTuning) -> Self {
        Self {
            heading: random_heading(rng),
            timer: Timer::new(random_heading_interval(rng, tuning), TimerMode::Once),
        }
    }

    /// Advance the countdown; pick a new heading and interval when it runs
    /// out. Returns true when the heading changed.
    pub fn tick(&mut self, delta: Duration, rng: &mut impl Rng, tuning: &WanderTuning) -> bool {
        self.timer.tick(delta);
        if !self.timer.finished() {
            return false;
        }

        *self = Self::random(rng, tuning);
        true
    }
}
