//! Game board runtime
//!
//! All gameplay logic lives here:
//! - Fixed timestep only; `dt` is always the loop driver's constant step
//! - Stable iteration order (board insertion order)
//! - Seeded RNG only, held by the [`GameContext`]
//! - No platform dependencies; drawing goes through `Surface`

pub mod blueprint;
pub mod board;
pub mod context;
pub mod entity;
pub mod level;

pub use blueprint::{Blueprints, EnemyBlueprint, EnemyOverrides, Motion, axian_blueprints};
pub use board::{Board, overlap};
pub use context::{GameContext, GameEvent};
pub use entity::{Animation, Entity, EntityId, EntityKind, ExplosionAction, ObjectType};
pub use level::{Level, SpawnEntry, axian_level1, level1};
