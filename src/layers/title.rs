//! Title screen

use crate::error::Result;
use crate::game::Layer;
use crate::sim::{GameContext, GameEvent};
use crate::surface::{Color, Surface, TextAlign, TextStyle};

const TITLE_FONT: &str = "80px virgo";
const SUBTITLE_FONT: &str = "14px joystix";
/// Subtitle baseline below the title
const SUBTITLE_GAP: f32 = 40.0;

/// Centered title text that starts a game when fire is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct TitleScreen {
    title: String,
    subtitle: String,
}

impl TitleScreen {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

impl Layer for TitleScreen {
    fn step(&mut self, _dt: f32, ctx: &mut GameContext) -> Result<()> {
        // The press is consumed so the new ship doesn't fire on its first frame
        if ctx.input.take_fire() {
            ctx.emit(GameEvent::StartRequested);
        }
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()> {
        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;
        surface.save();
        surface.fill_text(
            &self.title,
            cx,
            cy,
            &TextStyle::new(TITLE_FONT, Color::WHITE, TextAlign::Center),
        );
        surface.fill_text(
            &self.subtitle,
            cx,
            cy + SUBTITLE_GAP,
            &TextStyle::new(SUBTITLE_FONT, Color::CYAN, TextAlign::Center),
        );
        surface.restore();
        Ok(())
    }
}
