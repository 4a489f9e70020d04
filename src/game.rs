//! Layer stack and fixed timestep loop driver
//!
//! The game is a sparse stack of layers indexed by z-order. Every tick each
//! present layer, lowest index first, is stepped and then drawn. Scene
//! changes requested during a step (start, win, lose) are applied right
//! after that layer's step, so a layer replaced mid-tick is drawn in its new
//! form the same frame.

use crate::config::GameConfig;
use crate::error::Result;
use crate::input::InputState;
use crate::layers::{GamePoints, Lives, StarField, TitleScreen};
use crate::sim::{Board, Entity, GameContext, GameEvent, axian_level1};
use crate::sprites::SpriteSheet;
use crate::surface::Surface;

/// Z index of the title screen or game board
pub const BOARD_LAYER: usize = 3;
/// Z index of the lives HUD
pub const LIVES_LAYER: usize = 4;
/// Z index of the score HUD
pub const POINTS_LAYER: usize = 5;

const GAME_TITLE: &str = "Axian";

/// Anything that lives on the layer stack
pub trait Layer {
    /// Advance by `dt` seconds
    fn step(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()>;
    fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()>;
}

/// Owns the layer stack and the shared context, and runs one tick at a time
pub struct Game {
    config: GameConfig,
    ctx: GameContext,
    /// Sparse: absent indices are skipped
    layers: Vec<Option<Box<dyn Layer>>>,
    dt: f32,
    frames: u64,
}

impl Game {
    /// Create a game on a `width` x `height` surface, showing the title scene
    pub fn new(config: GameConfig, sprites: SpriteSheet, width: f32, height: f32) -> Self {
        let ctx = GameContext::new(width, height, sprites, config.seed);
        let dt = config.dt();
        let mut game = Self {
            config,
            ctx,
            layers: Vec::new(),
            dt,
            frames: 0,
        };
        game.start();
        game
    }

    /// Title scene over a three-speed parallax starfield
    pub fn start(&mut self) {
        let fields = [(20.0, 0.4, 80, true), (50.0, 0.6, 40, false), (100.0, 1.0, 10, false)];
        for (z, (speed, opacity, stars, clear)) in fields.into_iter().enumerate() {
            let field = StarField::new(&mut self.ctx, speed, opacity, stars, clear);
            self.set_layer(z, Box::new(field));
        }
        self.set_layer(
            BOARD_LAYER,
            Box::new(TitleScreen::new(GAME_TITLE, "Press fire to start")),
        );
        log::info!("Title screen ready");
    }

    /// Fresh game board with the player ship and the first level
    pub fn play(&mut self) -> Result<()> {
        self.ctx.points = 0;
        self.ctx.lives = self.config.initial_lives;

        let mut board = Board::new();
        board.add(Entity::player_ship(&self.ctx)?);
        board.set_level(axian_level1()?);

        self.set_layer(BOARD_LAYER, Box::new(board));
        self.set_layer(LIVES_LAYER, Box::new(Lives::new()));
        self.set_layer(POINTS_LAYER, Box::new(GamePoints::new()));
        log::info!("Game started with {} lives", self.ctx.lives);
        Ok(())
    }

    /// Back to the title after a win or a loss. The score line stays up.
    fn finish(&mut self) {
        self.remove_layer(LIVES_LAYER);
        self.set_layer(
            BOARD_LAYER,
            Box::new(TitleScreen::new(GAME_TITLE, "Press fire to play again")),
        );
    }

    /// Place `layer` at index `z`, replacing whatever was there
    pub fn set_layer(&mut self, z: usize, layer: Box<dyn Layer>) {
        if z >= self.layers.len() {
            self.layers.resize_with(z + 1, || None);
        }
        self.layers[z] = Some(layer);
    }

    /// Clear index `z`; other layers keep their indices
    pub fn remove_layer(&mut self, z: usize) -> Option<Box<dyn Layer>> {
        self.layers.get_mut(z).and_then(Option::take)
    }

    pub fn layer(&self, z: usize) -> Option<&dyn Layer> {
        self.layers.get(z).and_then(|slot| slot.as_deref())
    }

    pub fn has_layer(&self, z: usize) -> bool {
        self.layers.get(z).is_some_and(Option::is_some)
    }

    /// Number of indices present
    pub fn layer_count(&self) -> usize {
        self.layers.iter().flatten().count()
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.ctx.input
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fixed step in seconds handed to every layer
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Ticks run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: step then draw each present layer in z-order.
    ///
    /// Layers added past the current top during this frame wait for the
    /// next one.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let len = self.layers.len();
        for z in 0..len {
            let Some(mut layer) = self.layers.get_mut(z).and_then(Option::take) else {
                continue;
            };
            let result = layer.step(self.dt, &mut self.ctx);
            self.layers[z] = Some(layer);
            result?;

            self.handle_events()?;

            if let Some(layer) = self.layers.get(z).and_then(Option::as_ref) {
                layer.draw(surface, &self.ctx)?;
            }
        }
        self.frames += 1;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        for event in self.ctx.drain_events() {
            match event {
                GameEvent::StartRequested => self.play()?,
                GameEvent::LevelCleared => {
                    self.ctx.levels += 1;
                    log::info!("Level cleared with {} points", self.ctx.points);
                    self.finish();
                }
                GameEvent::GameOver => {
                    log::info!("Game over with {} points", self.ctx.points);
                    self.finish();
                }
            }
        }
        Ok(())
    }
}
