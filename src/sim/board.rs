//! The game board: entity lifecycle and collision engine
//!
//! Entities are kept in insertion order. Removal is deferred: `remove` only
//! marks an entity, and the mark is applied by the finalize pass at the end
//! of [`Board::step`]. Until then a removed entity is still in the sequence
//! and still visible to [`Board::collide`] for the rest of the step pass.
//! Gameplay relies on `remove` reporting the first mark only, so a kill is
//! scored once even when two shots land in the same frame.

use std::collections::HashMap;

use super::context::GameContext;
use super::entity::{Entity, EntityId, ObjectType};
use super::level::Level;
use crate::error::Result;
use crate::game::Layer;
use crate::surface::{Rect, Surface};

/// Inclusive pixel-edge overlap test.
///
/// Boxes touching on their boundary pixel count as overlapping: the far edge
/// of a box is `x + w - 1`.
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    !((a.y + a.h - 1.0 < b.y)
        || (a.y > b.y + b.h - 1.0)
        || (a.x + a.w - 1.0 < b.x)
        || (a.x > b.x + b.w - 1.0))
}

/// A layer holding the live entities of one gameplay scene
#[derive(Debug, Default)]
pub struct Board {
    /// Live sequence. A slot is `None` only while its entity is being
    /// stepped or hit, i.e. while it is borrowed out of the board.
    objects: Vec<Option<Entity>>,
    /// Live count per type tag
    counts: HashMap<ObjectType, u32>,
    /// Marked for removal this frame
    removed: Vec<EntityId>,
    /// Spawn director stepped at the start of each pass
    level: Option<Level>,
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the level director that feeds this board enemies
    pub fn set_level(&mut self, level: Level) {
        self.level = Some(level);
    }

    /// Append an entity and hand back its id
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        self.next_id += 1;
        entity.id = EntityId(self.next_id);
        *self.counts.entry(entity.object_type()).or_insert(0) += 1;
        log::trace!("add {:?} {:?}", entity.id, entity.kind);
        let id = entity.id;
        self.objects.push(Some(entity));
        id
    }

    /// Mark an entity for removal at the end of the frame.
    ///
    /// Returns `true` only for the call that newly marked it.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if self.removed.contains(&id) {
            return false;
        }
        self.removed.push(id);
        true
    }

    pub fn is_pending_removal(&self, id: EntityId) -> bool {
        self.removed.contains(&id)
    }

    /// Forget last frame's removal marks
    pub fn reset_removed(&mut self) {
        self.removed.clear();
    }

    /// Physically drop every marked entity and update the type counts
    pub fn finalize_removed(&mut self) {
        for id in &self.removed {
            let Some(index) = self
                .objects
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|e| e.id == *id))
            else {
                continue;
            };
            if let Some(entity) = self.objects.remove(index) {
                if let Some(count) = self.counts.get_mut(&entity.object_type()) {
                    *count = count.saturating_sub(1);
                }
                log::trace!("removed {:?}", entity.id);
            }
        }
    }

    /// Entities in the live sequence, including ones marked for removal
    pub fn live_count(&self) -> usize {
        self.objects.len()
    }

    /// Live entities carrying exactly this type tag
    pub fn count(&self, object_type: ObjectType) -> u32 {
        self.counts.get(&object_type).copied().unwrap_or(0)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.iter().find(|e| e.id == id)
    }

    /// Live entities in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.objects.iter().flatten()
    }

    /// Call `f` on every live entity in sequence order, stopping at the
    /// first error
    pub fn iterate<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&Entity) -> Result<()>,
    {
        for entity in self.iter() {
            f(entity)?;
        }
        Ok(())
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.objects
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|e| e.id == id))
    }

    /// First entity in sequence order, other than `entity` itself, whose
    /// type intersects `mask` (an empty mask matches anything) and whose box
    /// overlaps `entity`'s box.
    ///
    /// Entities already marked for removal this frame are still candidates.
    /// Explosions keep the tag of what exploded, so a shot that reaches one
    /// first is spent on it without effect.
    pub fn collide(&self, entity: &Entity, mask: ObjectType) -> Option<EntityId> {
        let bounds = entity.bounds();
        self.iter()
            .find(|other| {
                other.id != entity.id
                    && (mask.is_empty() || other.object_type().intersects(mask))
                    && overlap(&bounds, &other.bounds())
            })
            .map(|other| other.id)
    }

    /// Deliver `damage` to a live entity
    pub fn hit(&mut self, id: EntityId, damage: i32, ctx: &mut GameContext) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            return Ok(());
        };
        let Some(mut target) = self.objects[index].take() else {
            return Ok(());
        };
        let result = target.hit(damage, self, ctx);
        self.objects[index] = Some(target);
        result
    }

    /// Step the entity at `index` in the live sequence
    pub fn step_entity(&mut self, index: usize, dt: f32, ctx: &mut GameContext) -> Result<()> {
        let Some(mut entity) = self.objects.get_mut(index).and_then(Option::take) else {
            return Ok(());
        };
        let result = entity.step(dt, self, ctx);
        // Slots never shift during a pass: adds append, removals wait for finalize
        self.objects[index] = Some(entity);
        result
    }

    /// Step pass without the reset/finalize bookkeeping. Entities added
    /// during the pass join the sequence but are first stepped next frame.
    pub fn iterate_step(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        let len = self.objects.len();
        if let Some(mut level) = self.level.take() {
            let result = level.step(dt, self, ctx);
            self.level = Some(level);
            result?;
        }
        for index in 0..len {
            self.step_entity(index, dt, ctx)?;
        }
        Ok(())
    }

    /// Full frame: reset marks, step everything, apply removals
    pub fn step(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        self.reset_removed();
        self.iterate_step(dt, ctx)?;
        self.finalize_removed();
        Ok(())
    }

    pub fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()> {
        self.iterate(|entity| entity.draw(surface, &ctx.sprites))
    }
}

impl Layer for Board {
    fn step(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        Board::step(self, dt, ctx)
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) -> Result<()> {
        Board::draw(self, surface, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::blueprint::{EnemyBlueprint, Motion};
    use crate::sim::entity::ExplosionAction;
    use crate::sprites::SpriteSheet;
    use crate::surface::RecordingSurface;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ctx() -> GameContext {
        let mut ctx = GameContext::new(320.0, 480.0, SpriteSheet::axian(), 42);
        ctx.lives = INITIAL_LIVES;
        ctx
    }

    /// Stationary enemy that never fires
    fn sitting_enemy(ctx: &GameContext, x: f32, y: f32) -> Entity {
        let mut bp = EnemyBlueprint::new("alien1", x, y);
        bp.fire_percentage = 0.0;
        Entity::enemy(&ctx.sprites, &bp).unwrap()
    }

    #[test]
    fn test_remove_is_idempotent_within_a_frame() {
        let ctx = ctx();
        let mut board = Board::new();
        let id = board.add(sitting_enemy(&ctx, 0.0, 0.0));
        assert!(board.remove(id));
        assert!(!board.remove(id));
        assert!(board.is_pending_removal(id));
    }

    #[test]
    fn test_add_tracks_type_counts() {
        let ctx = ctx();
        let mut board = Board::new();
        board.add(sitting_enemy(&ctx, 0.0, 0.0));
        board.add(sitting_enemy(&ctx, 50.0, 0.0));
        board.add(Entity::player_ship(&ctx).unwrap());
        assert_eq!(board.count(ObjectType::ENEMY), 2);
        assert_eq!(board.count(ObjectType::PLAYER), 1);
        assert_eq!(board.count(ObjectType::POWERUP), 0);
        assert_eq!(board.live_count(), 3);
    }

    #[test]
    fn test_removed_entity_stays_until_finalize() {
        let ctx = ctx();
        let mut board = Board::new();
        let a = board.add(sitting_enemy(&ctx, 0.0, 0.0));
        let b = board.add(sitting_enemy(&ctx, 10.0, 10.0));
        board.add(sitting_enemy(&ctx, 200.0, 200.0));

        board.reset_removed();
        assert!(board.remove(b));
        assert_eq!(board.live_count(), 3);
        // Still collidable while only marked
        let query = board.get(a).unwrap().clone();
        assert_eq!(board.collide(&query, ObjectType::ENEMY), Some(b));

        board.finalize_removed();
        assert_eq!(board.live_count(), 2);
        assert_eq!(board.count(ObjectType::ENEMY), 2);
        assert!(board.get(b).is_none());
        assert_eq!(board.collide(&query, ObjectType::ENEMY), None);
    }

    #[test]
    fn test_kill_during_pass_is_finalized_at_end_of_step() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let mut weak = EnemyBlueprint::new("alien1", 100.0, 100.0);
        weak.health = MISSILE_DAMAGE;
        weak.fire_percentage = 0.0;
        let missile = board.add(Entity::player_missile(&ctx.sprites, 112.0, 140.0).unwrap());
        let enemy = board.add(Entity::enemy(&ctx.sprites, &weak).unwrap());
        board.add(sitting_enemy(&ctx, 250.0, 300.0));

        board.reset_removed();
        board.step_entity(0, SIM_DT, &mut ctx).unwrap();
        // Missile and enemy are marked, explosion appended
        assert!(board.is_pending_removal(missile));
        assert!(board.is_pending_removal(enemy));
        assert_eq!(board.live_count(), 4);
        assert_eq!(ctx.points, DEFAULT_POINTS);

        board.finalize_removed();
        assert_eq!(board.live_count(), 2);
        assert!(board.get(enemy).is_none());
        assert!(board.get(missile).is_none());
        // The explosion carries the enemy tag
        assert_eq!(board.count(ObjectType::ENEMY), 2);
    }

    #[test]
    fn test_two_hits_in_one_frame_score_once() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let mut weak = EnemyBlueprint::new("alien1", 100.0, 100.0);
        weak.health = MISSILE_DAMAGE;
        weak.fire_percentage = 0.0;
        board.add(Entity::player_missile(&ctx.sprites, 105.0, 140.0).unwrap());
        board.add(Entity::player_missile(&ctx.sprites, 115.0, 140.0).unwrap());
        board.add(Entity::enemy(&ctx.sprites, &weak).unwrap());

        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(ctx.points, DEFAULT_POINTS);
        let explosions = board
            .iter()
            .filter(|e| e.sprite == "alienExplosion")
            .count();
        assert_eq!(explosions, 1);
        // Both missiles spent themselves on the same target
        assert_eq!(board.count(ObjectType::PLAYER_PROJECTILE), 0);
    }

    #[test]
    fn test_collide_never_returns_self() {
        let ctx = ctx();
        let mut board = Board::new();
        let a = board.add(sitting_enemy(&ctx, 0.0, 0.0));
        let e = board.get(a).unwrap().clone();
        assert_eq!(board.collide(&e, ObjectType::ANY), None);
        assert_eq!(board.collide(&e, ObjectType::ENEMY), None);
    }

    #[test]
    fn test_collide_filters_by_mask_and_returns_first_match() {
        let ctx = ctx();
        let mut board = Board::new();
        let ship = board.add(Entity::player_ship(&ctx).unwrap());
        let query = board.get(ship).unwrap().clone();
        let first = board.add(sitting_enemy(&ctx, query.pos.x, query.pos.y));
        let second = board.add(sitting_enemy(&ctx, query.pos.x + 2.0, query.pos.y));

        assert_eq!(board.collide(&query, ObjectType::ENEMY), Some(first));
        assert_eq!(board.collide(&query, ObjectType::ANY), Some(first));
        assert_eq!(board.collide(&query, ObjectType::ENEMY_PROJECTILE), None);

        board.reset_removed();
        board.remove(first);
        board.finalize_removed();
        assert_eq!(board.collide(&query, ObjectType::ENEMY), Some(second));
    }

    #[test]
    fn test_entities_added_mid_pass_wait_a_frame() {
        let mut ctx = ctx();
        let mut board = Board::new();
        board.add(Entity::player_ship(&ctx).unwrap());
        ctx.input.fire = true;

        // Ship reload starts at 0.25s
        for _ in 0..9 {
            board.step(SIM_DT, &mut ctx).unwrap();
        }
        assert_eq!(board.count(ObjectType::PLAYER_PROJECTILE), 1);
        let missile = board
            .iter()
            .find(|e| e.object_type() == ObjectType::PLAYER_PROJECTILE)
            .unwrap();
        // Not moved yet: spawned during this frame's pass
        let ship = board
            .iter()
            .find(|e| e.object_type() == ObjectType::PLAYER)
            .unwrap();
        assert_eq!(missile.pos.y, ship.pos.y - missile.size.y);
    }

    #[test]
    fn test_held_fire_shoots_once_until_reasserted() {
        let mut ctx = ctx();
        let mut board = Board::new();
        board.add(Entity::player_ship(&ctx).unwrap());

        // Every player missile ever seen; each lives for many frames
        let mut fired = std::collections::HashSet::new();
        let mut step_and_record = |board: &mut Board, ctx: &mut GameContext| {
            board.step(SIM_DT, ctx).unwrap();
            fired.extend(
                board
                    .iter()
                    .filter(|e| e.object_type() == ObjectType::PLAYER_PROJECTILE)
                    .map(|e| e.id()),
            );
            fired.len()
        };

        // Several reload cycles with the key held but no repeat
        ctx.input.fire = true;
        for _ in 0..39 {
            step_and_record(&mut board, &mut ctx);
        }
        assert_eq!(step_and_record(&mut board, &mut ctx), 1);
        assert!(!ctx.input.fire);

        ctx.input.fire = true;
        for _ in 0..39 {
            step_and_record(&mut board, &mut ctx);
        }
        assert_eq!(step_and_record(&mut board, &mut ctx), 2);
    }

    #[test]
    fn test_enemy_wraps_left_to_right() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let id = board.add(sitting_enemy(&ctx, -30.0, 100.0));
        board.step(SIM_DT, &mut ctx).unwrap();
        let e = board.get(id).unwrap();
        assert_eq!(e.pos.x, 320.0);
        assert_eq!(e.pos.y, 100.0);
    }

    #[test]
    fn test_enemy_missile_leaves_through_bottom() {
        let mut ctx = ctx();
        let mut board = Board::new();
        // Top edge at 477, one step carries it past 480
        board.add(Entity::enemy_missile(&ctx.sprites, 50.0, 485.0).unwrap());
        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    fn test_enemy_missile_stays_while_on_screen() {
        let mut ctx = ctx();
        let mut board = Board::new();
        board.add(Entity::enemy_missile(&ctx.sprites, 50.0, 470.0).unwrap());
        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(board.live_count(), 1);
    }

    #[test]
    fn test_iterate_visits_in_order_and_stops_on_error() {
        let ctx = ctx();
        let mut board = Board::new();
        let a = board.add(sitting_enemy(&ctx, 0.0, 0.0));
        let b = board.add(sitting_enemy(&ctx, 50.0, 0.0));
        board.add(sitting_enemy(&ctx, 100.0, 0.0));

        let mut seen = Vec::new();
        board
            .iterate(|e| {
                seen.push(e.id());
                Ok(())
            })
            .unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(&seen[..2], &[a, b]);

        let mut visited = 0;
        let result = board.iterate(|e| {
            visited += 1;
            if e.id() == b {
                Err(crate::error::GameError::MissingSprite(e.sprite.clone()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_shot_into_explosion_is_spent() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let enemy = board.add(sitting_enemy(&ctx, 100.0, 100.0));
        // Explosion in front of the enemy, in the missile's path
        board.add(
            Entity::explosion(&ctx.sprites, ObjectType::ENEMY, 112.0, 140.0, ExplosionAction::None)
                .unwrap(),
        );
        board.add(Entity::player_missile(&ctx.sprites, 112.0, 170.0).unwrap());

        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(board.count(ObjectType::PLAYER_PROJECTILE), 0);
        assert_eq!(board.get(enemy).unwrap().health, 10);
        assert_eq!(ctx.points, 0);
    }

    #[test]
    fn test_missile_leaves_through_top() {
        let mut ctx = ctx();
        let mut board = Board::new();
        board.add(Entity::player_missile(&ctx.sprites, 50.0, 10.0).unwrap());
        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    fn test_enemy_missile_hits_ship() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let ship = board.add(Entity::player_ship(&ctx).unwrap());
        let s = board.get(ship).unwrap().clone();
        board.add(Entity::enemy_missile(&ctx.sprites, s.center().x, s.pos.y).unwrap());

        board.step(SIM_DT, &mut ctx).unwrap();
        assert!(board.get(ship).is_none());
        assert_eq!(ctx.lives, INITIAL_LIVES - 1);
        assert_eq!(board.count(ObjectType::PLAYER), 1, "explosion keeps the player tag");
        assert_eq!(board.count(ObjectType::ENEMY_PROJECTILE), 0);
    }

    #[test]
    fn test_ship_explosion_respawns_ship_while_lives_remain() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let ship = board.add(Entity::player_ship(&ctx).unwrap());
        board.hit(ship, 1, &mut ctx).unwrap();
        board.finalize_removed();
        assert_eq!(ctx.lives, INITIAL_LIVES - 1);

        // 4 frames * hold 5
        for _ in 0..20 {
            board.step(SIM_DT, &mut ctx).unwrap();
        }
        let ships: Vec<_> = board.iter().filter(|e| e.sprite == "ship").collect();
        assert_eq!(ships.len(), 1);
        assert!(board.iter().all(|e| e.sprite != "shipExplosion"));
        assert!(ctx.pending_events().is_empty());
    }

    #[test]
    fn test_last_life_raises_game_over() {
        let mut ctx = ctx();
        ctx.lives = 1;
        let mut board = Board::new();
        let ship = board.add(Entity::player_ship(&ctx).unwrap());
        board.hit(ship, 1, &mut ctx).unwrap();
        board.finalize_removed();
        for _ in 0..20 {
            board.step(SIM_DT, &mut ctx).unwrap();
        }
        assert_eq!(board.live_count(), 0);
        assert_eq!(ctx.drain_events(), vec![crate::sim::GameEvent::GameOver]);
    }

    #[test]
    fn test_enemy_contact_damages_player_but_enemy_survives() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let ship = board.add(Entity::player_ship(&ctx).unwrap());
        let s = board.get(ship).unwrap().clone();
        let enemy = board.add(sitting_enemy(&ctx, s.pos.x, s.pos.y));

        board.step(SIM_DT, &mut ctx).unwrap();
        assert!(board.get(ship).is_none());
        assert!(board.get(enemy).is_some());
        assert_eq!(ctx.points, 0);
    }

    #[test]
    fn test_enemy_wraps_one_edge_per_step() {
        let mut ctx = ctx();
        let mut board = Board::new();
        // Past the bottom and the right edge at once
        let mut bp = EnemyBlueprint::new("alien1", 330.0, 490.0);
        bp.fire_percentage = 0.0;
        let id = board.add(Entity::enemy(&ctx.sprites, &bp).unwrap());

        board.step(SIM_DT, &mut ctx).unwrap();
        let e = board.get(id).unwrap();
        assert_eq!(e.pos.y, 0.0);
        assert_eq!(e.pos.x, 330.0);

        board.step(SIM_DT, &mut ctx).unwrap();
        let e = board.get(id).unwrap();
        assert_eq!(e.pos.x, -24.0);
    }

    #[test]
    fn test_enemy_motion_matches_numeric_integration() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let mut bp = EnemyBlueprint::new("alien1", 0.0, 0.0).with_motion(Motion {
            b: 100.0,
            c: 1.0,
            ..Default::default()
        });
        bp.fire_percentage = 0.0;
        let id = board.add(Entity::enemy(&ctx.sprites, &bp).unwrap());

        // Wide surface so nothing wraps
        ctx.width = 10_000.0;
        let dt = 1.0;
        let mut t = 0.0f32;
        let mut expected = 0.0f32;
        while t < std::f32::consts::TAU {
            board.step(dt, &mut ctx).unwrap();
            t += dt;
            expected += 100.0 * t.sin() * dt;
            let e = board.get(id).unwrap();
            assert!((e.pos.x - expected).abs() < 1e-3, "t={t}: {} vs {expected}", e.pos.x);
            assert_eq!(e.pos.y, 0.0);
        }
    }

    #[test]
    fn test_enemy_fires_from_wing_tips() {
        let mut ctx = ctx();
        let mut board = Board::new();
        let mut bp = EnemyBlueprint::new("alien2", 100.0, 100.0);
        bp.fire_percentage = 1.0;
        bp.missiles = 2;
        board.add(Entity::enemy(&ctx.sprites, &bp).unwrap());

        board.step(SIM_DT, &mut ctx).unwrap();
        let xs: Vec<f32> = board
            .iter()
            .filter(|e| e.object_type() == ObjectType::ENEMY_PROJECTILE)
            .map(|e| e.pos.x)
            .collect();
        assert_eq!(xs, vec![100.0 + 24.0 - 2.0 - 1.0, 100.0 + 2.0 - 1.0]);

        // Reloading: no more shots for a while
        board.step(SIM_DT, &mut ctx).unwrap();
        assert_eq!(board.count(ObjectType::ENEMY_PROJECTILE), 2);
    }

    #[test]
    fn test_draw_renders_live_entities_in_order() {
        let ctx = ctx();
        let mut board = Board::new();
        board.add(sitting_enemy(&ctx, 1.0, 2.0));
        board.add(Entity::player_ship(&ctx).unwrap());
        let mut surface = RecordingSurface::new(320.0, 480.0);
        board.draw(&mut surface, &ctx).unwrap();
        let dests: Vec<Vec2> = surface
            .sprite_draws()
            .map(|(_, d)| Vec2::new(d.x, d.y))
            .collect();
        assert_eq!(dests[0], Vec2::new(1.0, 2.0));
        assert_eq!(dests.len(), 2);
    }

    #[test]
    fn test_overlap_inclusive_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Sharing the last pixel column
        assert!(overlap(&a, &Rect::new(9.0, 0.0, 5.0, 5.0)));
        // One pixel clear
        assert!(!overlap(&a, &Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!overlap(&a, &Rect::new(0.0, 10.0, 5.0, 5.0)));
        assert!(overlap(&a, &Rect::new(-4.0, -4.0, 5.0, 5.0)));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric_and_matches_closed_ranges(
            x1 in -50i32..50, y1 in -50i32..50, w1 in 1i32..30, h1 in 1i32..30,
            x2 in -50i32..50, y2 in -50i32..50, w2 in 1i32..30, h2 in 1i32..30,
        ) {
            let a = Rect::new(x1 as f32, y1 as f32, w1 as f32, h1 as f32);
            let b = Rect::new(x2 as f32, y2 as f32, w2 as f32, h2 as f32);
            let ranges_meet = |lo1: i32, len1: i32, lo2: i32, len2: i32| {
                lo1 <= lo2 + len2 - 1 && lo2 <= lo1 + len1 - 1
            };
            let expected = ranges_meet(x1, w1, x2, w2) && ranges_meet(y1, h1, y2, h2);
            prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
            prop_assert_eq!(overlap(&a, &b), expected);
        }

        #[test]
        fn prop_remove_reports_first_mark_only(n in 1usize..8, picks in proptest::collection::vec(0usize..8, 1..20)) {
            let ctx = ctx();
            let mut board = Board::new();
            let ids: Vec<_> = (0..n).map(|i| board.add(sitting_enemy(&ctx, i as f32 * 30.0, 0.0))).collect();
            let mut marked = std::collections::HashSet::new();
            for p in picks {
                let id = ids[p % n];
                prop_assert_eq!(board.remove(id), marked.insert(id));
            }
        }
    }
}
