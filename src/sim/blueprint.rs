//! Enemy blueprints
//!
//! A blueprint is the full parameter set for one kind of enemy: sprite,
//! spawn position, toughness and the eight motion coefficients. Level
//! schedules name a blueprint and may override any of its fields.

use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Closed-form enemy velocity:
///
/// ```text
/// vx = A + B * sin(C * t + D)
/// vy = E + F * sin(G * t + H)
/// ```
///
/// `A`/`E` are constant drift, `B`/`F` the sway strength, `C`/`G` the sway
/// frequency and `D`/`H` the phase shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    #[serde(rename = "A", default)]
    pub a: f32,
    #[serde(rename = "B", default)]
    pub b: f32,
    #[serde(rename = "C", default)]
    pub c: f32,
    #[serde(rename = "D", default)]
    pub d: f32,
    #[serde(rename = "E", default)]
    pub e: f32,
    #[serde(rename = "F", default)]
    pub f: f32,
    #[serde(rename = "G", default)]
    pub g: f32,
    #[serde(rename = "H", default)]
    pub h: f32,
}

impl Motion {
    /// Velocity at per-entity time `t` (seconds)
    #[inline]
    pub fn velocity(&self, t: f32) -> Vec2 {
        Vec2::new(
            self.a + self.b * (self.c * t + self.d).sin(),
            self.e + self.f * (self.g * t + self.h).sin(),
        )
    }
}

/// Parameters for spawning one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBlueprint {
    pub sprite: String,
    pub x: f32,
    pub y: f32,
    /// Damage dealt to the player on contact
    pub damage: i32,
    pub health: i32,
    /// Simulation steps per animation frame
    pub hold: u32,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(flatten)]
    pub motion: Motion,
    #[serde(default = "default_fire_percentage")]
    pub fire_percentage: f32,
    #[serde(default = "default_reload_time")]
    pub reload_time: f32,
    /// 2 fires from both wing tips, anything else from the centre
    #[serde(default = "default_missiles")]
    pub missiles: u32,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_fire_percentage() -> f32 {
    ENEMY_FIRE_PERCENTAGE
}

fn default_reload_time() -> f32 {
    ENEMY_RELOAD_TIME
}

fn default_missiles() -> u32 {
    1
}

impl EnemyBlueprint {
    /// Blueprint with the standard toughness and no motion
    pub fn new(sprite: &str, x: f32, y: f32) -> Self {
        Self {
            sprite: sprite.to_string(),
            x,
            y,
            damage: 1,
            health: 10,
            hold: 20,
            points: DEFAULT_POINTS,
            motion: Motion::default(),
            fire_percentage: ENEMY_FIRE_PERCENTAGE,
            reload_time: ENEMY_RELOAD_TIME,
            missiles: 1,
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Copy of this blueprint with every set override applied
    pub fn merged(&self, overrides: &EnemyOverrides) -> Self {
        let mut merged = self.clone();
        overrides.apply(&mut merged);
        merged
    }
}

/// Per-spawn replacements for blueprint fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyOverrides {
    pub sprite: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub damage: Option<i32>,
    pub health: Option<i32>,
    pub hold: Option<u32>,
    pub points: Option<u32>,
    #[serde(rename = "A")]
    pub a: Option<f32>,
    #[serde(rename = "B")]
    pub b: Option<f32>,
    #[serde(rename = "C")]
    pub c: Option<f32>,
    #[serde(rename = "D")]
    pub d: Option<f32>,
    #[serde(rename = "E")]
    pub e: Option<f32>,
    #[serde(rename = "F")]
    pub f: Option<f32>,
    #[serde(rename = "G")]
    pub g: Option<f32>,
    #[serde(rename = "H")]
    pub h: Option<f32>,
    pub fire_percentage: Option<f32>,
    pub reload_time: Option<f32>,
    pub missiles: Option<u32>,
}

impl EnemyOverrides {
    /// Override only the spawn position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn x(x: f32) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    pub fn apply(&self, bp: &mut EnemyBlueprint) {
        fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                *dst = v.clone();
            }
        }

        set(&mut bp.sprite, &self.sprite);
        set(&mut bp.x, &self.x);
        set(&mut bp.y, &self.y);
        set(&mut bp.damage, &self.damage);
        set(&mut bp.health, &self.health);
        set(&mut bp.hold, &self.hold);
        set(&mut bp.points, &self.points);
        set(&mut bp.motion.a, &self.a);
        set(&mut bp.motion.b, &self.b);
        set(&mut bp.motion.c, &self.c);
        set(&mut bp.motion.d, &self.d);
        set(&mut bp.motion.e, &self.e);
        set(&mut bp.motion.f, &self.f);
        set(&mut bp.motion.g, &self.g);
        set(&mut bp.motion.h, &self.h);
        set(&mut bp.fire_percentage, &self.fire_percentage);
        set(&mut bp.reload_time, &self.reload_time);
        set(&mut bp.missiles, &self.missiles);
    }
}

/// Named blueprint table
pub type Blueprints = HashMap<String, EnemyBlueprint>;

/// The built-in enemy behaviours
pub fn axian_blueprints() -> Blueprints {
    // Slow sway used by the level 1 formation
    let formation = Motion {
        b: 22.0,
        c: 1.0,
        d: FRAC_PI_2,
        e: 5.0,
        ..Default::default()
    };

    let mut table = Blueprints::new();
    table.insert(
        "straight".into(),
        EnemyBlueprint::new("alien1", 0.0, -50.0).with_motion(Motion {
            e: 100.0,
            ..Default::default()
        }),
    );
    table.insert(
        "ltr".into(),
        EnemyBlueprint::new("alien1", 0.0, -100.0).with_motion(Motion {
            b: 200.0,
            c: 1.0,
            e: 200.0,
            ..Default::default()
        }),
    );
    table.insert(
        "circle".into(),
        EnemyBlueprint::new("alien4", 400.0, -50.0).with_motion(Motion {
            b: -200.0,
            c: 1.0,
            e: 20.0,
            f: 200.0,
            g: 1.0,
            h: FRAC_PI_2,
            ..Default::default()
        }),
    );
    table.insert(
        "wiggle".into(),
        EnemyBlueprint::new("alien3", 100.0, -50.0)
            .with_health(20)
            .with_motion(Motion {
                b: 100.0,
                c: 4.0,
                e: 100.0,
                ..Default::default()
            }),
    );
    table.insert(
        "step".into(),
        EnemyBlueprint::new("alien2", 0.0, -50.0).with_motion(Motion {
            b: 100.0,
            c: 1.5,
            e: 60.0,
            ..Default::default()
        }),
    );
    for (key, sprite) in [
        ("aaa", "alien1"),
        ("bbb", "alien2"),
        ("ccc", "alien3"),
        ("ddd", "alien4"),
    ] {
        table.insert(
            key.into(),
            EnemyBlueprint::new(sprite, 0.0, 0.0).with_motion(formation),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_touch_set_fields() {
        let table = axian_blueprints();
        let base = &table["wiggle"];
        let merged = base.merged(&EnemyOverrides {
            x: Some(300.0),
            c: Some(2.0),
            ..Default::default()
        });
        assert_eq!(merged.x, 300.0);
        assert_eq!(merged.motion.c, 2.0);
        assert_eq!(merged.y, base.y);
        assert_eq!(merged.health, 20);
        assert_eq!(merged.motion.b, base.motion.b);
        // The table entry is untouched
        assert_eq!(table["wiggle"].x, 100.0);
    }

    #[test]
    fn test_motion_velocity() {
        let m = Motion {
            a: 1.0,
            b: 2.0,
            c: 1.0,
            d: 0.0,
            e: 3.0,
            f: 0.0,
            ..Default::default()
        };
        let v = m.velocity(FRAC_PI_2);
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_blueprint_json_uses_letter_coefficients() {
        let json = r#"{
            "sprite": "alien1", "x": 0, "y": -50, "damage": 1,
            "health": 10, "hold": 20, "E": 100
        }"#;
        let bp: EnemyBlueprint = serde_json::from_str(json).unwrap();
        assert_eq!(bp.motion.e, 100.0);
        assert_eq!(bp.motion.a, 0.0);
        assert_eq!(bp.points, DEFAULT_POINTS);
        assert_eq!(bp.missiles, 1);

        let ov: EnemyOverrides = serde_json::from_str(r#"{ "x": 50, "H": 1.5 }"#).unwrap();
        assert_eq!(ov.x, Some(50.0));
        assert_eq!(ov.h, Some(1.5));
        assert_eq!(ov.y, None);
    }
}
