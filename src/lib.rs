//! Axian - A Galaxian-style arcade shooter
//!
//! Core modules:
//! - `sim`: Game board runtime (entities, collisions, level spawning)
//! - `game`: Layer stack and fixed timestep loop driver
//! - `layers`: Starfields, title screen and HUD layers
//! - `sprites`: Sprite sheet lookup table
//! - `surface`: Drawing surface abstraction
//! - `platform`: Browser bindings

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod layers;
pub mod platform;
pub mod sim;
pub mod sprites;
pub mod surface;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, Layer};
pub use input::InputState;
pub use sprites::{SpriteSheet, SpriteTile};
pub use surface::{RecordingSurface, Surface};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (30 ms per tick)
    pub const SIM_DT: f32 = 30.0 / 1000.0;
    /// Scheduler interval between ticks in milliseconds
    pub const TICK_MS: i32 = 30;

    /// Default canvas dimensions
    pub const DEFAULT_WIDTH: f32 = 320.0;
    pub const DEFAULT_HEIGHT: f32 = 480.0;

    /// Player ship tuning
    pub const SHIP_MAX_VEL: f32 = 200.0;
    pub const SHIP_RELOAD_TIME: f32 = 0.25;
    /// Gap between the ship and the bottom edge
    pub const SHIP_BOTTOM_MARGIN: f32 = 30.0;

    /// Missile tuning
    pub const PLAYER_MISSILE_VY: f32 = -700.0;
    pub const ENEMY_MISSILE_VY: f32 = 200.0;
    pub const MISSILE_DAMAGE: i32 = 10;

    /// Enemy fire defaults
    pub const ENEMY_FIRE_PERCENTAGE: f32 = 0.001;
    pub const ENEMY_RELOAD_TIME: f32 = 5.0;

    /// Points awarded when a kill doesn't specify its own
    pub const DEFAULT_POINTS: u32 = 100;
    pub const INITIAL_LIVES: u32 = 3;

    /// How far ahead (ms) the level director scans its schedule
    pub const LEVEL_LOOKAHEAD_MS: f32 = 2000.0;

    /// Explosion animation holds
    pub const SHIP_EXPLOSION_HOLD: u32 = 5;
    pub const ALIEN_EXPLOSION_HOLD: u32 = 3;

    /// Levels per wave flag on the lives HUD
    pub const LEVELS_PER_WAVE: u32 = 4;
}
