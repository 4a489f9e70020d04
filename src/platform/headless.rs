//! Headless runner
//!
//! Drives a [`Game`] over a [`RecordingSurface`] with scripted key events.
//! Used by the native binary as an attract-mode demo and by tests to play
//! whole sessions deterministically.

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::Game;
use crate::input::Action;
use crate::sprites::SpriteSheet;
use crate::surface::RecordingSurface;

/// A key going down or up at the start of a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub frame: u64,
    pub action: Action,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(frame: u64, action: Action) -> Self {
        Self {
            frame,
            action,
            pressed: true,
        }
    }

    pub fn up(frame: u64, action: Action) -> Self {
        Self {
            frame,
            action,
            pressed: false,
        }
    }
}

/// End-of-run snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub points: u32,
    pub highscore: u32,
    pub lives: u32,
    /// Draw calls issued on the final frame
    pub draw_calls: usize,
}

/// Start a game, then sweep left and right tapping fire
pub fn demo_script(frames: u64) -> Vec<KeyEvent> {
    let mut script = vec![KeyEvent::down(1, Action::Fire), KeyEvent::up(2, Action::Fire)];
    let mut frame = 10;
    let mut going_left = true;
    while frame < frames {
        let dir = if going_left { Action::Left } else { Action::Right };
        script.push(KeyEvent::down(frame, dir));
        for tap in (frame..frame + 50).step_by(10) {
            script.push(KeyEvent::down(tap, Action::Fire));
            script.push(KeyEvent::up(tap + 1, Action::Fire));
        }
        script.push(KeyEvent::up(frame + 50, dir));
        going_left = !going_left;
        frame += 50;
    }
    script
}

/// Play `frames` ticks, applying `script` as the frames come up
pub fn run(config: &GameConfig, frames: u64, script: &[KeyEvent]) -> Result<RunSummary> {
    let mut game = Game::new(config.clone(), SpriteSheet::axian(), config.width, config.height);
    let mut surface = RecordingSurface::new(config.width, config.height);
    let mut events = script.iter().peekable();

    for frame in 0..frames {
        while let Some(event) = events.next_if(|e| e.frame <= frame) {
            game.input_mut().set(event.action, event.pressed);
        }
        surface.clear();
        game.tick(&mut surface)?;

        if frame > 0 && frame % 500 == 0 {
            let ctx = game.context();
            log::info!(
                "frame {}: {} points, {} lives, {} draw calls",
                frame,
                ctx.points,
                ctx.lives,
                surface.commands().len()
            );
        }
    }

    let ctx = game.context();
    Ok(RunSummary {
        frames: game.frames(),
        points: ctx.points,
        highscore: ctx.highscore,
        lives: ctx.lives,
        draw_calls: surface.commands().len(),
    })
}
