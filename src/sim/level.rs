//! Level director
//!
//! Feeds a board with enemies from a timed spawn schedule and reports when
//! the level is cleared.

use serde::{Deserialize, Serialize};

use super::blueprint::{Blueprints, EnemyOverrides, axian_blueprints};
use super::board::Board;
use super::context::{GameContext, GameEvent};
use super::entity::{Entity, ObjectType};
use crate::consts::*;
use crate::error::{GameError, Result};

/// One repeating spawn instruction. Times are milliseconds of level clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Next spawn time; advanced by `gap` after each spawn
    pub start: f32,
    /// Entry is retired once the clock passes this
    pub end: f32,
    /// Interval between repeated spawns
    pub gap: f32,
    /// Blueprint key
    pub enemy: String,
    #[serde(default)]
    pub overrides: EnemyOverrides,
}

impl SpawnEntry {
    pub fn new(start: f32, end: f32, gap: f32, enemy: &str, overrides: EnemyOverrides) -> Self {
        Self {
            start,
            end,
            gap,
            enemy: enemy.to_string(),
            overrides,
        }
    }
}

/// Time-driven enemy spawner
#[derive(Debug, Clone)]
pub struct Level {
    schedule: Vec<SpawnEntry>,
    blueprints: Blueprints,
    /// Level clock in ms
    t: f32,
    completed: bool,
}

impl Level {
    /// Build a level, rejecting schedule entries with unknown blueprints
    pub fn new(schedule: Vec<SpawnEntry>, blueprints: Blueprints) -> Result<Self> {
        if let Some(entry) = schedule
            .iter()
            .find(|e| !blueprints.contains_key(&e.enemy))
        {
            return Err(GameError::UnknownBlueprint(entry.enemy.clone()));
        }
        Ok(Self {
            schedule,
            blueprints,
            t: 0.0,
            completed: false,
        })
    }

    /// Parse a JSON array of spawn entries
    pub fn from_json(json: &str, blueprints: Blueprints) -> Result<Self> {
        let schedule: Vec<SpawnEntry> = serde_json::from_str(json)?;
        Self::new(schedule, blueprints)
    }

    /// Level clock in milliseconds
    pub fn clock(&self) -> f32 {
        self.t
    }

    pub fn schedule(&self) -> &[SpawnEntry] {
        &self.schedule
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn step(&mut self, dt: f32, board: &mut Board, ctx: &mut GameContext) -> Result<()> {
        self.t += dt * 1000.0;
        let t = self.t;

        let mut expired = Vec::new();
        for (index, entry) in self.schedule.iter_mut().enumerate() {
            if entry.start >= t + LEVEL_LOOKAHEAD_MS {
                break;
            }
            if t > entry.end {
                expired.push(index);
            } else if entry.start < t {
                let blueprint = self
                    .blueprints
                    .get(&entry.enemy)
                    .ok_or_else(|| GameError::UnknownBlueprint(entry.enemy.clone()))?
                    .merged(&entry.overrides);
                board.add(Entity::enemy(&ctx.sprites, &blueprint)?);
                log::debug!("Spawned `{}` at {:.0}ms", entry.enemy, t);
                entry.start += entry.gap;
            }
        }

        for index in expired.into_iter().rev() {
            self.schedule.remove(index);
        }

        if !self.completed && self.schedule.is_empty() && board.count(ObjectType::ENEMY) == 0 {
            self.completed = true;
            log::info!("Level cleared at {:.0}ms", t);
            ctx.emit(GameEvent::LevelCleared);
        }
        Ok(())
    }
}

/// Level 1: a six-row formation that drifts down the screen
pub fn level1() -> Vec<SpawnEntry> {
    const XO: f32 = 25.0;
    const YO: f32 = 180.0;
    const W: f32 = 30.0;
    const H: f32 = 30.0;

    // (blueprint, row, first column, last column)
    let rows = [
        ("aaa", 0, 0, 8),
        ("aaa", 1, 0, 8),
        ("aaa", 2, 0, 8),
        ("bbb", 3, 1, 7),
        ("ccc", 4, 2, 6),
        ("ddd", 5, 3, 5),
    ];

    let mut schedule = Vec::new();
    for (enemy, row, first, last) in rows {
        for col in first..=last {
            schedule.push(SpawnEntry::new(
                0.0,
                4000.0,
                4000.0,
                enemy,
                EnemyOverrides::at(XO + W * col as f32, YO - H * row as f32),
            ));
        }
    }
    schedule
}

/// Level 1 with the built-in blueprints
pub fn axian_level1() -> Result<Level> {
    Level::new(level1(), axian_blueprints())
}
