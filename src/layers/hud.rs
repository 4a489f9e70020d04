//! In-game HUD: remaining lives, level flags and the score line

use crate::consts::*;
use crate::error::Result;
use crate::game::Layer;
use crate::sim::GameContext;
use crate::surface::{Color, Surface, TextAlign, TextStyle};

const HUD_FONT: &str = "14px joystix";
/// Margin between HUD icons and the screen edges
const EDGE_MARGIN: f32 = 3.0;
/// Space between neighbouring icons
const ICON_SPACING: f32 = 8.0;
/// Icons sit this far above the bottom edge
const BOTTOM_MARGIN: f32 = 5.0;
const LABEL_Y: f32 = 14.0;
const SCORE_Y: f32 = 28.0;

/// Spare ships along the bottom left, level flags along the bottom right
#[derive(Debug, Clone, Default)]
pub struct Lives;

impl Lives {
    pub fn new() -> Self {
        Self
    }

    /// Flags shown for the current level count: one per wave of levels, plus one
    pub fn flag_count(levels: u32) -> u32 {
        levels.div_ceil(LEVELS_PER_WAVE) + 1
    }
}

impl Layer for Lives {
    fn step(&mut self, _dt: f32, _ctx: &mut GameContext) -> Result<()> {
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()> {
        let life = ctx.sprites.tile("life")?;
        let flag = ctx.sprites.tile("flag")?;

        // The ship in play is not a spare
        let y = ctx.height - life.h - BOTTOM_MARGIN;
        for i in 0..ctx.lives.saturating_sub(1) {
            let x = EDGE_MARGIN + (life.w + ICON_SPACING) * i as f32;
            ctx.sprites.draw(surface, "life", x, y, 0)?;
        }

        let y = ctx.height - flag.h - BOTTOM_MARGIN;
        for i in 0..Self::flag_count(ctx.levels) {
            let x = ctx.width - EDGE_MARGIN - flag.w - (flag.w + ICON_SPACING) * i as f32;
            ctx.sprites.draw(surface, "flag", x, y, 0)?;
        }
        Ok(())
    }
}

/// Score line along the top; keeps the high score current
#[derive(Debug, Clone, Default)]
pub struct GamePoints;

impl GamePoints {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for GamePoints {
    fn step(&mut self, _dt: f32, ctx: &mut GameContext) -> Result<()> {
        ctx.highscore = ctx.highscore.max(ctx.points);
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()> {
        let center = ctx.width / 2.0;
        let centered = |color| TextStyle::new(HUD_FONT, color, TextAlign::Center);
        let left = |color| TextStyle::new(HUD_FONT, color, TextAlign::Left);

        surface.save();
        surface.fill_text("Hi score", center, LABEL_Y, &centered(Color::WHITE));
        surface.fill_text("1up", 0.0, LABEL_Y, &left(Color::WHITE));
        surface.fill_text(
            &ctx.highscore.to_string(),
            center,
            SCORE_Y,
            &centered(Color::RED),
        );
        surface.fill_text(&ctx.points.to_string(), 0.0, SCORE_Y, &left(Color::RED));
        surface.restore();
        Ok(())
    }
}
