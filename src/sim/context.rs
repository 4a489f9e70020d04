//! Shared per-session state
//!
//! Replaces the global game object: input snapshot, score, lives and the
//! sprite table are handed explicitly to everything that steps or draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::InputState;
use crate::sprites::SpriteSheet;

/// Scene-level events raised during a step, handled by the loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fire pressed on a title screen
    StartRequested,
    /// Schedule exhausted and every enemy gone
    LevelCleared,
    /// Last ship destroyed
    GameOver,
}

/// Everything entities and layers may read or mutate during a frame
#[derive(Debug, Clone)]
pub struct GameContext {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
    /// Key state, written between frames by the platform
    pub input: InputState,
    pub points: u32,
    pub highscore: u32,
    pub lives: u32,
    /// Levels started this session (drives the flag count on the HUD)
    pub levels: u32,
    pub sprites: SpriteSheet,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameContext {
    pub fn new(width: f32, height: f32, sprites: SpriteSheet, seed: u64) -> Self {
        Self {
            width,
            height,
            input: InputState::default(),
            points: 0,
            highscore: 0,
            lives: 0,
            levels: 1,
            sprites,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Uniform roll in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn emit(&mut self, event: GameEvent) {
        log::debug!("Event: {:?}", event);
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
