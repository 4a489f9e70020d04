//! Game configuration
//!
//! Loaded once at startup. Every field has a default so a partial JSON
//! document only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Startup configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// DOM id of the target canvas element
    pub canvas_id: String,
    /// URL of the sprite sheet image
    pub sprite_sheet_url: String,

    // === Headless surface ===
    /// Surface width used when no canvas is available (native runs)
    pub width: f32,
    /// Surface height used when no canvas is available (native runs)
    pub height: f32,

    // === Simulation ===
    /// Milliseconds between scheduled ticks
    pub tick_ms: i32,
    /// Seed for starfields and enemy fire rolls
    pub seed: u64,
    /// Lives granted at the start of each game
    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "game".to_string(),
            sprite_sheet_url: "imgs/sprites.png".to_string(),

            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            tick_ms: TICK_MS,
            seed: 0x00A1_1A4E,
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Fixed simulation step in seconds derived from the tick interval
    pub fn dt(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}
