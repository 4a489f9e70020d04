//! Game entities
//!
//! Every object on a board shares the same state (position, size, velocity,
//! health, animation cursor) and differs only in how it steps. Kind-specific
//! state lives in [`EntityKind`].

use std::ops::BitOr;

use glam::Vec2;

use super::blueprint::{EnemyBlueprint, Motion};
use super::board::Board;
use super::context::{GameContext, GameEvent};
use crate::consts::*;
use crate::error::Result;
use crate::sprites::SpriteSheet;
use crate::surface::{Rect, Surface};

/// Collision type tag. One bit per kind so tags can be OR-ed into masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectType(pub u32);

impl ObjectType {
    /// Empty mask: matches any type in a collision query
    pub const ANY: ObjectType = ObjectType(0);
    pub const PLAYER: ObjectType = ObjectType(1);
    pub const PLAYER_PROJECTILE: ObjectType = ObjectType(2);
    pub const ENEMY: ObjectType = ObjectType(4);
    pub const ENEMY_PROJECTILE: ObjectType = ObjectType(8);
    pub const POWERUP: ObjectType = ObjectType(16);

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any bit is shared with `mask`
    #[inline]
    pub fn intersects(self, mask: ObjectType) -> bool {
        self.0 & mask.0 != 0
    }
}

impl BitOr for ObjectType {
    type Output = ObjectType;

    fn bitor(self, rhs: ObjectType) -> ObjectType {
        ObjectType(self.0 | rhs.0)
    }
}

/// Board-assigned handle. Zero until the entity is added to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Sprite animation cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Animation {
    /// Tile currently displayed
    pub frame: u32,
    /// Steps elapsed in the current cycle
    pub sub_frame: u32,
    /// Steps each tile is held for
    pub hold: u32,
    /// Tiles in the cycle
    pub frames: u32,
}

impl Animation {
    pub fn new(frames: u32, hold: u32) -> Self {
        Self {
            frame: 0,
            sub_frame: 0,
            hold,
            frames,
        }
    }

    /// Advance one simulation step. Returns true when the cycle has just
    /// completed; the caller decides whether to loop or stop.
    pub fn advance(&mut self) -> bool {
        self.frame = self.sub_frame / self.hold.max(1);
        self.sub_frame += 1;
        self.sub_frame >= self.frames * self.hold
    }

    /// Advance and wrap back to the first tile at the end of the cycle
    pub fn advance_looping(&mut self) {
        if self.advance() {
            self.sub_frame = 0;
        }
    }
}

/// What happens when an explosion animation finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExplosionAction {
    #[default]
    None,
    /// Put a fresh ship on the board if lives remain, else end the game
    RespawnPlayer,
}

/// Player ship tuning and reload timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipState {
    pub max_vel: f32,
    pub reload_time: f32,
    /// Seconds until the next shot; fires once below zero
    pub reload: f32,
}

/// Enemy motion clock and fire control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyState {
    pub motion: Motion,
    /// Seconds since spawn
    pub t: f32,
    pub fire_percentage: f32,
    pub reload_time: f32,
    pub reload: f32,
    pub missiles: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    PlayerShip(ShipState),
    PlayerProjectile,
    Enemy(EnemyState),
    EnemyProjectile,
    Explosion(ExplosionAction),
}

/// A sprite-backed object living on a [`Board`]
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(super) id: EntityId,
    object_type: ObjectType,
    pub kind: EntityKind,
    pub sprite: String,
    pub pos: Vec2,
    /// Width and height, taken from the sprite tile
    pub size: Vec2,
    pub vel: Vec2,
    pub health: i32,
    pub damage: i32,
    pub points: u32,
    pub anim: Animation,
}

impl Entity {
    /// Common construction: sprite geometry comes from the sheet
    fn setup(
        sprites: &SpriteSheet,
        sprite: &str,
        object_type: ObjectType,
        kind: EntityKind,
        hold: u32,
    ) -> Result<Self> {
        let tile = sprites.tile(sprite)?;
        Ok(Self {
            id: EntityId::default(),
            object_type,
            kind,
            sprite: sprite.to_string(),
            pos: Vec2::ZERO,
            size: Vec2::new(tile.w, tile.h),
            vel: Vec2::ZERO,
            health: 0,
            damage: 0,
            points: DEFAULT_POINTS,
            anim: Animation::new(tile.frames, hold),
        })
    }

    /// Player ship, centred horizontally just above the bottom edge
    pub fn player_ship(ctx: &GameContext) -> Result<Self> {
        let ship = ShipState {
            max_vel: SHIP_MAX_VEL,
            reload_time: SHIP_RELOAD_TIME,
            reload: SHIP_RELOAD_TIME,
        };
        let mut e = Self::setup(
            &ctx.sprites,
            "ship",
            ObjectType::PLAYER,
            EntityKind::PlayerShip(ship),
            0,
        )?;
        e.anim.frame = 1;
        e.pos = Vec2::new(
            ctx.width / 2.0 - e.size.x / 2.0,
            ctx.height - SHIP_BOTTOM_MARGIN - e.size.y,
        );
        Ok(e)
    }

    /// Player missile whose nose sits at (x, y)
    pub fn player_missile(sprites: &SpriteSheet, x: f32, y: f32) -> Result<Self> {
        let mut e = Self::setup(
            sprites,
            "shipMissile",
            ObjectType::PLAYER_PROJECTILE,
            EntityKind::PlayerProjectile,
            0,
        )?;
        e.vel.y = PLAYER_MISSILE_VY;
        e.damage = MISSILE_DAMAGE;
        e.pos = Vec2::new(x - e.size.x / 2.0, y - e.size.y);
        Ok(e)
    }

    pub fn enemy(sprites: &SpriteSheet, bp: &EnemyBlueprint) -> Result<Self> {
        let state = EnemyState {
            motion: bp.motion,
            t: 0.0,
            fire_percentage: bp.fire_percentage,
            reload_time: bp.reload_time,
            reload: 0.0,
            missiles: bp.missiles,
        };
        let mut e = Self::setup(
            sprites,
            &bp.sprite,
            ObjectType::ENEMY,
            EntityKind::Enemy(state),
            bp.hold,
        )?;
        e.pos = Vec2::new(bp.x, bp.y);
        e.health = bp.health;
        e.damage = bp.damage;
        e.points = bp.points;
        Ok(e)
    }

    /// Enemy missile launched from (x, y)
    pub fn enemy_missile(sprites: &SpriteSheet, x: f32, y: f32) -> Result<Self> {
        let mut e = Self::setup(
            sprites,
            "alienMissile",
            ObjectType::ENEMY_PROJECTILE,
            EntityKind::EnemyProjectile,
            0,
        )?;
        e.vel.y = ENEMY_MISSILE_VY;
        e.damage = MISSILE_DAMAGE;
        e.pos = Vec2::new(x - e.size.x / 2.0, y - e.size.y);
        Ok(e)
    }

    /// Explosion centred on (cx, cy). Keeps the type of whatever exploded.
    pub fn explosion(
        sprites: &SpriteSheet,
        object_type: ObjectType,
        cx: f32,
        cy: f32,
        action: ExplosionAction,
    ) -> Result<Self> {
        let (sprite, hold) = if object_type == ObjectType::PLAYER {
            ("shipExplosion", SHIP_EXPLOSION_HOLD)
        } else {
            ("alienExplosion", ALIEN_EXPLOSION_HOLD)
        };
        let mut e = Self::setup(
            sprites,
            sprite,
            object_type,
            EntityKind::Explosion(action),
            hold,
        )?;
        e.pos = Vec2::new(cx - e.size.x / 2.0, cy - e.size.y / 2.0);
        Ok(e)
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Advance one fixed step. `board` is the board this entity lives on.
    pub fn step(&mut self, dt: f32, board: &mut Board, ctx: &mut GameContext) -> Result<()> {
        match self.kind {
            EntityKind::PlayerShip(_) => self.step_ship(dt, board, ctx),
            EntityKind::PlayerProjectile => {
                self.step_missile(dt, board, ctx, ObjectType::ENEMY)
            }
            EntityKind::Enemy(_) => self.step_enemy(dt, board, ctx),
            EntityKind::EnemyProjectile => {
                self.step_missile(dt, board, ctx, ObjectType::PLAYER)
            }
            EntityKind::Explosion(action) => self.step_explosion(action, board, ctx),
        }
    }

    fn step_ship(&mut self, dt: f32, board: &mut Board, ctx: &mut GameContext) -> Result<()> {
        let EntityKind::PlayerShip(ship) = &mut self.kind else {
            return Ok(());
        };

        self.vel.x = if ctx.input.left {
            -ship.max_vel
        } else if ctx.input.right {
            ship.max_vel
        } else {
            0.0
        };
        self.pos.x += self.vel.x * dt;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        } else if self.pos.x > ctx.width - self.size.x {
            self.pos.x = ctx.width - self.size.x;
        }

        ship.reload -= dt;
        self.anim.frame = if ship.reload < 0.0 { 1 } else { 0 };
        if ship.reload < 0.0 && ctx.input.take_fire() {
            ship.reload = ship.reload_time;
            let missile = Entity::player_missile(
                &ctx.sprites,
                self.pos.x + self.size.x / 2.0,
                self.pos.y,
            )?;
            board.add(missile);
        }
        Ok(())
    }

    /// Shared projectile behaviour: fly, hit the first target, or leave
    fn step_missile(
        &mut self,
        dt: f32,
        board: &mut Board,
        ctx: &mut GameContext,
        targets: ObjectType,
    ) -> Result<()> {
        self.pos.y += self.vel.y * dt;
        if let Some(target) = board.collide(self, targets) {
            board.hit(target, self.damage, ctx)?;
            board.remove(self.id);
        } else if self.off_screen(ctx.height) {
            board.remove(self.id);
        }
        Ok(())
    }

    /// Player missiles leave through the top, enemy missiles through the bottom
    fn off_screen(&self, height: f32) -> bool {
        match self.kind {
            EntityKind::PlayerProjectile => self.pos.y < -self.size.y,
            _ => self.pos.y > height,
        }
    }

    fn step_enemy(&mut self, dt: f32, board: &mut Board, ctx: &mut GameContext) -> Result<()> {
        let EntityKind::Enemy(mut enemy) = self.kind else {
            return Ok(());
        };

        enemy.t += dt;
        self.vel = enemy.motion.velocity(enemy.t);
        self.pos += self.vel * dt;

        if let Some(player) = board.collide(self, ObjectType::PLAYER) {
            board.hit(player, self.damage, ctx)?;
        }

        if enemy.reload <= 0.0 && ctx.roll() < enemy.fire_percentage {
            enemy.reload = enemy.reload_time;
            let y = self.pos.y + self.size.y / 2.0;
            if enemy.missiles == 2 {
                board.add(Entity::enemy_missile(
                    &ctx.sprites,
                    self.pos.x + self.size.x - 2.0,
                    y,
                )?);
                board.add(Entity::enemy_missile(&ctx.sprites, self.pos.x + 2.0, y)?);
            } else {
                board.add(Entity::enemy_missile(
                    &ctx.sprites,
                    self.pos.x + self.size.x / 2.0,
                    y,
                )?);
            }
        }
        enemy.reload -= dt;

        // Only one wrap rule applies per step
        if self.pos.y > ctx.height {
            self.pos.y = 0.0;
        } else if self.pos.x < -self.size.x {
            self.pos.x = ctx.width;
        } else if self.pos.x > ctx.width {
            self.pos.x = -self.size.x;
        }

        self.anim.advance_looping();
        self.kind = EntityKind::Enemy(enemy);
        Ok(())
    }

    fn step_explosion(
        &mut self,
        action: ExplosionAction,
        board: &mut Board,
        ctx: &mut GameContext,
    ) -> Result<()> {
        if self.anim.advance() {
            board.remove(self.id);
            match action {
                ExplosionAction::None => {}
                ExplosionAction::RespawnPlayer => {
                    if ctx.lives > 0 {
                        log::debug!("Respawning ship, {} lives left", ctx.lives);
                        board.add(Entity::player_ship(ctx)?);
                    } else {
                        ctx.emit(GameEvent::GameOver);
                    }
                }
            }
        }
        Ok(())
    }

    /// Take `damage`. Kills award points and leave an explosion behind,
    /// at most once however many hits land in the same frame.
    pub fn hit(&mut self, damage: i32, board: &mut Board, ctx: &mut GameContext) -> Result<()> {
        match self.kind {
            EntityKind::PlayerShip(_) => {
                if board.remove(self.id) {
                    ctx.lives = ctx.lives.saturating_sub(1);
                    log::info!("Ship destroyed, {} lives left", ctx.lives);
                    let c = self.center();
                    board.add(Entity::explosion(
                        &ctx.sprites,
                        self.object_type,
                        c.x,
                        c.y,
                        ExplosionAction::RespawnPlayer,
                    )?);
                }
            }
            // Explosions are scenery
            EntityKind::Explosion(_) => {}
            _ => {
                self.health -= damage;
                if self.health <= 0 && board.remove(self.id) {
                    ctx.points += self.points;
                    let c = self.center();
                    board.add(Entity::explosion(
                        &ctx.sprites,
                        self.object_type,
                        c.x,
                        c.y,
                        ExplosionAction::None,
                    )?);
                }
            }
        }
        Ok(())
    }

    pub fn draw(&self, surface: &mut dyn Surface, sprites: &SpriteSheet) -> Result<()> {
        sprites.draw(surface, &self.sprite, self.pos.x, self.pos.y, self.anim.frame)
    }
}
