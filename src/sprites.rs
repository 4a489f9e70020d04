//! Sprite sheet lookup table
//!
//! Maps sprite names to tile geometry on the single shared sprite sheet
//! image. Animated sprites lay their frames out left to right, so frame `n`
//! starts at `sx + n * w`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::surface::{Rect, Surface};

/// Geometry of one sprite on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteTile {
    /// X offset of the first frame
    pub sx: f32,
    /// Y offset of the first frame
    pub sy: f32,
    /// Tile width
    pub w: f32,
    /// Tile height
    pub h: f32,
    /// Number of animation tiles
    pub frames: u32,
}

impl SpriteTile {
    pub const fn new(sx: f32, sy: f32, w: f32, h: f32, frames: u32) -> Self {
        Self { sx, sy, w, h, frames }
    }

    /// Source rectangle for an animation frame
    pub fn source_rect(&self, frame: u32) -> Rect {
        Rect::new(self.sx + frame as f32 * self.w, self.sy, self.w, self.h)
    }
}

/// Name → tile table for the sprite sheet image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteSheet {
    tiles: HashMap<String, SpriteTile>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `name: { sx, sy, w, h, frames }`
    pub fn from_json(json: &str) -> Result<Self> {
        let sheet: Self = serde_json::from_str(json)?;
        log::info!("Loaded {} sprite mappings", sheet.tiles.len());
        Ok(sheet)
    }

    /// The built-in Axian sprite table
    pub fn axian() -> Self {
        let mut sheet = Self::new();
        for (name, tile) in [
            ("ship", SpriteTile::new(238.0, 62.0, 26.0, 40.0, 2)),
            ("shipExplosion", SpriteTile::new(0.0, 340.0, 64.0, 64.0, 4)),
            ("shipMissile", SpriteTile::new(238.0, 34.0, 2.0, 8.0, 1)),
            ("alien1", SpriteTile::new(0.0, 0.0, 24.0, 24.0, 3)),
            ("alien1RollLeft", SpriteTile::new(0.0, 24.0, 24.0, 24.0, 9)),
            ("alien1RollRight", SpriteTile::new(0.0, 48.0, 24.0, 24.0, 9)),
            ("alien2", SpriteTile::new(0.0, 72.0, 24.0, 24.0, 3)),
            ("alien2RollLeft", SpriteTile::new(0.0, 96.0, 24.0, 24.0, 9)),
            ("alien2RollRight", SpriteTile::new(0.0, 120.0, 24.0, 24.0, 9)),
            ("alien3", SpriteTile::new(0.0, 144.0, 24.0, 24.0, 3)),
            ("alien3RollLeft", SpriteTile::new(0.0, 168.0, 24.0, 24.0, 9)),
            ("alien3RollRight", SpriteTile::new(0.0, 192.0, 24.0, 24.0, 9)),
            ("alien4", SpriteTile::new(0.0, 216.0, 24.0, 24.0, 0)),
            ("alien4RollLeft", SpriteTile::new(0.0, 240.0, 24.0, 24.0, 12)),
            ("alien4RollRight", SpriteTile::new(0.0, 264.0, 24.0, 24.0, 12)),
            ("alienExplosion", SpriteTile::new(0.0, 306.0, 34.0, 34.0, 4)),
            ("alienMissile", SpriteTile::new(242.0, 34.0, 2.0, 8.0, 1)),
            ("life", SpriteTile::new(322.0, 80.0, 18.0, 22.0, 1)),
            ("flag", SpriteTile::new(306.0, 80.0, 14.0, 22.0, 1)),
        ] {
            sheet.insert(name, tile);
        }
        sheet
    }

    pub fn insert(&mut self, name: &str, tile: SpriteTile) {
        self.tiles.insert(name.to_string(), tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a sprite, failing on unknown names instead of drawing garbage
    pub fn tile(&self, name: &str) -> Result<&SpriteTile> {
        self.tiles
            .get(name)
            .ok_or_else(|| GameError::MissingSprite(name.to_string()))
    }

    /// Draw one frame of a sprite at its natural size
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        name: &str,
        x: f32,
        y: f32,
        frame: u32,
    ) -> Result<()> {
        let tile = self.tile(name)?;
        surface.draw_sprite(tile.source_rect(frame), Rect::new(x, y, tile.w, tile.h));
        Ok(())
    }
}
