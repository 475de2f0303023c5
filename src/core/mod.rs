//! Core game module - config, states, events and shared resources.
//!
//! This module provides the foundation that the player and enemy plugins
//! build upon.

mod config;
mod error;
mod events;
mod plugin;
mod rng;
mod states;
mod viewport;

pub use config::{GameConfig, CONFIG_PATH};
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::GameRng;
pub use states::*;
pub use viewport::Viewport;
