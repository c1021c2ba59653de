//! Derived gameplay settings

use crate::axis::{clamp_rating, RATING_MIN};
use crate::tuning::WeaponTuning;
use crate::vector::StatVector;
use serde::{Deserialize, Serialize};

/// Map a 1-100 rating onto [0, 1]
pub fn normalized(rating: i32) -> f32 {
    (clamp_rating(rating) - RATING_MIN) as f32 / 99.0
}

/// Resolved gameplay parameters consumed by the firing/movement layer.
///
/// Derivation is a pure function of the stat vector and tuning: the same
/// inputs always produce the same settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSettings {
    /// Projectile speed in world units per second
    pub bullet_speed: f32,
    /// Spread cone angle in degrees
    pub spread_angle: f32,
    /// Seconds between consecutive shots
    pub fire_interval: f32,
    /// Upward recoil in degrees per shot
    pub recoil_upward: f32,
    /// Kickback distance per shot
    pub recoil_kickback: f32,
    /// Reload duration in seconds
    pub reload_time: f32,
    /// Aim-down-sights FOV in degrees
    pub aim_fov: f32,
    /// Rounds per magazine
    pub magazine_size: u32,
    /// Damage per hit
    pub damage: f32,
}

impl WeaponSettings {
    /// Resolve gameplay parameters from a stat vector.
    ///
    /// Power, recoil ratings interpolate min -> max; accuracy, rapidity,
    /// reload speed, and scope interpolate max -> min so that a better
    /// rating shrinks spread, fire interval, reload time, and aim FOV.
    pub fn derive(stats: &StatVector, tuning: &WeaponTuning) -> Self {
        let recoil_t = normalized(stats.recoil);

        Self {
            bullet_speed: tuning.bullet_speed.lerp(normalized(stats.power)),
            spread_angle: tuning.spread_angle.lerp_inverted(normalized(stats.accuracy)),
            fire_interval: tuning.fire_interval.lerp_inverted(normalized(stats.rapidity)),
            recoil_upward: tuning.recoil_upward.lerp(recoil_t),
            recoil_kickback: tuning.recoil_kickback.lerp(recoil_t),
            reload_time: tuning.reload_time.lerp_inverted(normalized(stats.reload_speed)),
            aim_fov: tuning.aim_fov.lerp_inverted(normalized(stats.scope)),
            magazine_size: stats.ammo,
            damage: stats.damage,
        }
    }
}
