//! Tuning bounds for derived weapon settings

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning configuration errors
#[derive(Debug, Error)]
pub enum TuningError {
    /// A bound pair has min above max
    #[error("reversed bounds for {0}: min {1} > max {2}")]
    ReversedBounds(&'static str, f32, f32),
    /// Config file could not be parsed
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A min/max bound pair for one derived parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Value at the low end of the driving rating
    pub min: f32,
    /// Value at the high end of the driving rating
    pub max: f32,
}

impl Bounds {
    /// Create a bound pair
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interpolate min -> max by `t` in [0, 1]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min * (1.0 - t) + self.max * t
    }

    /// Interpolate max -> min by `t` in [0, 1]
    pub fn lerp_inverted(&self, t: f32) -> f32 {
        self.max * (1.0 - t) + self.min * t
    }
}

/// Externally configurable lerp bounds for every derived setting.
///
/// `Default` carries the reference tuning; a deployment may override any
/// subset by deserializing a JSON document over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Bullet speed in world units per second (driven by power)
    pub bullet_speed: Bounds,
    /// Spread angle in degrees (driven by accuracy, inverted)
    pub spread_angle: Bounds,
    /// Seconds between shots (driven by rapidity, inverted)
    pub fire_interval: Bounds,
    /// Upward recoil in degrees per shot (driven by recoil)
    pub recoil_upward: Bounds,
    /// Kickback distance per shot (driven by recoil)
    pub recoil_kickback: Bounds,
    /// Reload duration in seconds (driven by reload speed, inverted)
    pub reload_time: Bounds,
    /// Aim-down-sights FOV in degrees (driven by scope, inverted)
    pub aim_fov: Bounds,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            bullet_speed: Bounds::new(50.0, 300.0),
            spread_angle: Bounds::new(0.0, 6.0),
            fire_interval: Bounds::new(0.08, 1.2),
            recoil_upward: Bounds::new(0.2, 3.0),
            recoil_kickback: Bounds::new(0.05, 0.6),
            reload_time: Bounds::new(0.8, 3.5),
            aim_fov: Bounds::new(20.0, 55.0),
        }
    }
}

impl WeaponTuning {
    /// Parse a JSON override document, falling back to defaults for any
    /// omitted field, and validate the result.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject reversed bound pairs
    pub fn validate(&self) -> Result<(), TuningError> {
        let pairs = [
            ("bullet_speed", self.bullet_speed),
            ("spread_angle", self.spread_angle),
            ("fire_interval", self.fire_interval),
            ("recoil_upward", self.recoil_upward),
            ("recoil_kickback", self.recoil_kickback),
            ("reload_time", self.reload_time),
            ("aim_fov", self.aim_fov),
        ];

        for (name, bounds) in pairs {
            if bounds.min > bounds.max {
                return Err(TuningError::ReversedBounds(name, bounds.min, bounds.max));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = WeaponTuning::default();

        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.bullet_speed.min, 50.0);
        assert_eq!(tuning.bullet_speed.max, 300.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let bounds = Bounds::new(50.0, 300.0);

        assert_eq!(bounds.lerp(0.0), 50.0);
        assert_eq!(bounds.lerp(1.0), 300.0);
        assert_eq!(bounds.lerp_inverted(0.0), 300.0);
        assert_eq!(bounds.lerp_inverted(1.0), 50.0);
    }

    #[test]
    fn test_json_override() {
        let tuning =
            WeaponTuning::from_json(r#"{"bullet_speed": {"min": 80.0, "max": 400.0}}"#).unwrap();

        assert_eq!(tuning.bullet_speed.min, 80.0);
        assert_eq!(tuning.bullet_speed.max, 400.0);
        // Omitted fields keep the reference defaults
        assert_eq!(tuning.aim_fov.max, 55.0);
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let mut tuning = WeaponTuning::default();
        tuning.reload_time = Bounds::new(5.0, 1.0);

        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ReversedBounds("reload_time", _, _))
        ));
    }
}
