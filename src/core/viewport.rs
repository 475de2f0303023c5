//! Playable area resource, kept in sync with the primary window.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::Deserialize;

/// Size of the playable area in world units.
///
/// Enemies spawn on its edges and wandering enemies are clamped inside it.
/// The origin is the top-left corner: x grows right, y grows down.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a point into [0, width] × [0, height].
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(0.0, self.width.max(0.0)),
            point.y.clamp(0.0, self.height.max(0.0)),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Copy the primary window's logical size into the viewport.
///
/// Headless apps have no window, so the configured fallback size stays.
pub fn sync_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    let size = Viewport::new(window.width(), window.height());
    if *viewport != size {
        debug!("Viewport resized to {}x{}", size.width, size.height);
        *viewport = size;
    }
}
