//! Scrolling starfield
//!
//! Stars are scattered once over a surface-sized field, then the whole field
//! scrolls down and wraps. Stacking several fields at different speeds gives
//! the parallax background.

use rand::Rng;

use crate::error::Result;
use crate::game::Layer;
use crate::sim::GameContext;
use crate::surface::{Color, Rect, Surface};

/// Star edge length in pixels
const STAR_SIZE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    x: f32,
    y: f32,
    color: Color,
}

#[derive(Debug, Clone)]
pub struct StarField {
    /// Scroll rate in pixels per second
    speed: f32,
    /// Paint the background black before the stars
    clear: bool,
    height: f32,
    /// Current scroll, always in [0, height)
    offset: f32,
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(
        ctx: &mut GameContext,
        speed: f32,
        opacity: f32,
        num_stars: usize,
        clear: bool,
    ) -> Self {
        let (width, height) = (ctx.width, ctx.height);
        let rng = ctx.rng();
        let stars = (0..num_stars)
            .map(|_| Star {
                x: rng.random_range(0..width.max(1.0) as u32) as f32,
                y: rng.random_range(0..height.max(1.0) as u32) as f32,
                color: Color::rgb(rng.random(), rng.random(), rng.random()).with_alpha(opacity),
            })
            .collect();
        Self {
            speed,
            clear,
            height,
            offset: 0.0,
            stars,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl Layer for StarField {
    fn step(&mut self, dt: f32, _ctx: &mut GameContext) -> Result<()> {
        self.offset = (self.offset + dt * self.speed) % self.height;
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &GameContext) -> Result<()> {
        if self.clear {
            surface.fill_rect(
                Rect::new(0.0, 0.0, surface.width(), surface.height()),
                Color::BLACK,
            );
        }
        // The field is drawn shifted down by the whole-pixel offset,
        // with the part pushed past the bottom wrapping to the top
        let shift = self.offset.floor();
        for star in &self.stars {
            let y = (star.y + shift) % self.height;
            surface.fill_rect(Rect::new(star.x, y, STAR_SIZE, STAR_SIZE), star.color);
        }
        Ok(())
    }
}
